use crate::app::Action;
use crate::core::StyleOption;
use crate::shared::MapOptions;

use super::Store;

/// Snapshot des MapOptionsStores
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptionsStoreState {
    /// Auswählbare Basemaps
    pub styles: Vec<StyleOption>,
    pub selected_style: StyleOption,
    /// Karten-Widget hat den ersten Ladevorgang abgeschlossen
    pub is_map_loaded: bool,
}

/// Basemap-Auswahl und Ladezustand der Karte
pub struct MapOptionsStore {
    styles: Vec<StyleOption>,
}

impl MapOptionsStore {
    /// Erstellt den Store; der konfigurierte Stil steht an erster Stelle.
    pub fn new(options: &MapOptions) -> Self {
        let mut styles = vec![StyleOption::new("Mapbox Streets", options.style_url.as_str())];
        for (name, url) in [
            (
                "Mapbox Satellite",
                "mapbox://styles/mapbox/satellite-streets-v11",
            ),
            ("Mapbox Outdoors", "mapbox://styles/mapbox/outdoors-v11"),
        ] {
            if url != options.style_url {
                styles.push(StyleOption::new(name, url));
            }
        }
        Self { styles }
    }
}

impl Store for MapOptionsStore {
    type State = MapOptionsStoreState;

    fn name(&self) -> &'static str {
        "map_options"
    }

    fn initial_state(&self) -> MapOptionsStoreState {
        MapOptionsStoreState {
            selected_style: self.styles[0].clone(),
            styles: self.styles.clone(),
            is_map_loaded: false,
        }
    }

    fn reduce(
        &self,
        state: &MapOptionsStoreState,
        action: &Action,
    ) -> Option<MapOptionsStoreState> {
        match action {
            Action::SelectMapStyle { style_option } => {
                if !state.styles.contains(style_option) {
                    log::warn!("Unbekannter Kartenstil '{}'", style_option.name);
                }
                Some(MapOptionsStoreState {
                    selected_style: style_option.clone(),
                    ..state.clone()
                })
            }
            Action::MapIsLoaded => {
                if state.is_map_loaded {
                    return None;
                }
                Some(MapOptionsStoreState {
                    is_map_loaded: true,
                    ..state.clone()
                })
            }
            Action::InfoReceived { .. }
            | Action::SetPoint { .. }
            | Action::SetVehicleProfile { .. }
            | Action::AddPoint { .. }
            | Action::ClearPoints
            | Action::RemovePoint { .. }
            | Action::InvalidatePoint { .. }
            | Action::RouteRequestSuccess { .. }
            | Action::RouteRequestFailed { .. }
            | Action::ClearRoute
            | Action::SetSelectedPath { .. }
            | Action::DismissLastError
            | Action::SetViewport { .. }
            | Action::SetViewportToBbox { .. }
            | Action::PathDetailsHover { .. }
            | Action::PathDetailsRangeSelected { .. }
            | Action::PathDetailsElevationSelected { .. } => None,
        }
    }
}
