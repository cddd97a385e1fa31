//! Map-Render-Adapter: besitzt genau ein Widget und gleicht es mit dem
//! jeweils letzten (Pfad, Wegpunkte, Bbox)-Tripel ab, ohne Historie nachzuspielen.

use super::{LineLayerStyle, MapEvent, MapWidget, MarkerId, MarkerOptions, PopupContent};
use crate::app::{Action, Dispatcher};
use crate::core::{Bbox, Coordinate, Feature, FeatureCollection, Geometry, Path, QueryPoint};
use crate::shared::options::{ROUTE_LAYER_KEY, ROUTE_SOURCE_KEY};
use crate::shared::MapOptions;
use anyhow::Context;
use indexmap::IndexMap;
use std::rc::Rc;

/// Lebenszyklus des Adapters: `NotReady → Ready → Removed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterPhase {
    /// Widget lädt noch; Zeichenaufrufe werden verworfen
    NotReady,
    /// Widget geladen
    Ready,
    /// Widget zerstört (Endzustand)
    Removed,
}

/// Callbacks des Hosts
pub struct MapCallbacks {
    /// Einmalig nach dem Laden
    pub on_ready: Box<dyn FnMut()>,
    pub on_click: Box<dyn FnMut(Coordinate)>,
    pub on_context_menu: Box<dyn FnMut(Coordinate)>,
}

impl Default for MapCallbacks {
    fn default() -> Self {
        Self {
            on_ready: Box::new(|| {}),
            on_click: Box::new(|_| {}),
            on_context_menu: Box::new(|_| {}),
        }
    }
}

/// Zustandsbehafteter Wrapper um ein Karten-Widget.
pub struct MapAdapter<W: MapWidget> {
    widget: W,
    phase: AdapterPhase,
    /// Beim Erzeugen eines Markers erfasster Wegpunkt je Marker
    markers: IndexMap<MarkerId, QueryPoint>,
    popup_open: bool,
    dispatcher: Rc<Dispatcher>,
    options: MapOptions,
    callbacks: MapCallbacks,
}

impl<W: MapWidget> MapAdapter<W> {
    /// Übernimmt ein frisch erzeugtes Widget. Bis `MapEvent::Loaded` ist der Adapter `NotReady`.
    pub fn new(
        widget: W,
        dispatcher: Rc<Dispatcher>,
        options: MapOptions,
        callbacks: MapCallbacks,
    ) -> Self {
        Self {
            widget,
            phase: AdapterPhase::NotReady,
            markers: IndexMap::new(),
            popup_open: false,
            dispatcher,
            options,
            callbacks,
        }
    }

    pub fn phase(&self) -> AdapterPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == AdapterPhase::Ready
    }

    /// Read-only Sicht auf das Widget
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Gibt das Widget zurück (z.B. nach `remove()` zur Inspektion)
    pub fn into_widget(self) -> W {
        self.widget
    }

    /// Anzahl aktuell angehängter Marker
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Verarbeitet ein Widget-Ereignis.
    pub fn handle_event(&mut self, event: MapEvent) -> anyhow::Result<()> {
        match event {
            MapEvent::Loaded => self.on_loaded()?,
            MapEvent::Click { coordinate } => {
                if self.phase != AdapterPhase::Removed {
                    (self.callbacks.on_click)(coordinate);
                }
            }
            MapEvent::ContextMenu { coordinate } => {
                if self.phase != AdapterPhase::Removed {
                    (self.callbacks.on_context_menu)(coordinate);
                }
            }
            MapEvent::MarkerDragEnd { marker, coordinate } => {
                self.on_marker_drag_end(marker, coordinate)
            }
        }
        Ok(())
    }

    fn on_loaded(&mut self) -> anyhow::Result<()> {
        if self.phase != AdapterPhase::NotReady {
            // Host wurde vor dem Laden abgebaut oder Ereignis doppelt
            log::debug!("Load-Ereignis in Phase {:?} ignoriert", self.phase);
            return Ok(());
        }

        self.widget
            .add_geojson_source(ROUTE_SOURCE_KEY, FeatureCollection::empty())
            .context("Routen-Quelle konnte nicht angelegt werden")?;
        let style = LineLayerStyle {
            line_color: self.options.route_line_color.clone(),
            line_width: self.options.route_line_width,
            round_join: true,
            round_cap: true,
        };
        self.widget
            .add_line_layer(ROUTE_LAYER_KEY, ROUTE_SOURCE_KEY, &style)
            .context("Routen-Layer konnte nicht angelegt werden")?;

        self.phase = AdapterPhase::Ready;
        log::info!("Karte geladen");
        (self.callbacks.on_ready)();
        Ok(())
    }

    fn on_marker_drag_end(&mut self, marker: MarkerId, coordinate: Coordinate) {
        if self.phase != AdapterPhase::Ready {
            return;
        }
        // Erfasster Punkt statt Neuberechnung über den Index
        let Some(captured) = self.markers.get(&marker) else {
            log::debug!("Drag-Ende für nicht mehr vorhandenen Marker {:?}", marker);
            return;
        };

        log::debug!(
            "Marker {:?} (Wegpunkt {}) verschoben nach {}",
            marker,
            captured.id,
            coordinate
        );
        let point = QueryPoint {
            coordinate: Some(coordinate),
            is_initialized: true,
            ..captured.clone()
        };
        self.dispatcher.dispatch(Action::SetPoint { point });
    }

    /// Setzt die Routen-Quelle auf den Pfad (oder leert sie).
    ///
    /// Quelle und Layer werden nur ersetzt, nie neu angelegt.
    pub fn draw_line(&mut self, path: &Path) -> anyhow::Result<()> {
        if !self.is_ready() {
            return Ok(());
        }

        log::debug!("Route zeichnen ({} Punkte)", path.point_count());
        let data = if path.points.is_empty() {
            FeatureCollection::empty()
        } else {
            FeatureCollection::single(Feature::new(Geometry::LineString(path.points.clone())))
        };
        self.widget
            .set_source_data(ROUTE_SOURCE_KEY, data)
            .context("Routen-Quelle konnte nicht aktualisiert werden")
    }

    /// Ersetzt alle Marker durch die initialisierten Wegpunkte.
    pub fn draw_markers(&mut self, query_points: &[QueryPoint]) {
        if !self.is_ready() {
            return;
        }

        for (marker, _) in self.markers.drain(..) {
            self.widget.remove_marker(marker);
        }

        for point in query_points {
            if !point.is_initialized {
                continue;
            }
            let Some(coordinate) = point.coordinate else {
                log::warn!("Wegpunkt {} ist initialisiert, hat aber keine Koordinate", point.id);
                continue;
            };
            let marker = self.widget.create_marker(MarkerOptions {
                coordinate,
                color: point.color.clone(),
                draggable: self.options.marker_draggable,
            });
            self.markers.insert(marker, point.clone());
        }

        for marker in self.markers.keys() {
            self.widget.attach_marker(*marker);
        }
        log::debug!("{} Marker gezeichnet", self.markers.len());
    }

    /// Verschiebt das einzige Popup an `coordinate` und ersetzt den Inhalt.
    pub fn draw_popup(&mut self, coordinate: Coordinate, content: &PopupContent) {
        if !self.is_ready() {
            return;
        }
        self.widget
            .show_popup(coordinate, content, &self.options.popup);
        self.popup_open = true;
    }

    /// Schließt das Popup, falls offen.
    pub fn close_popup(&mut self) {
        if self.popup_open {
            self.widget.close_popup();
            self.popup_open = false;
        }
    }

    /// Passt die Kamera auf `bbox` ein. Enthält `bbox` eine Null-Komponente, bleibt die Kamera stehen.
    ///
    /// Das Padding hängt von `viewport_width` zum Aufrufzeitpunkt ab.
    pub fn fit_bounds(&mut self, bbox: Bbox, viewport_width: f32) {
        if !self.is_ready() || bbox.is_unset() {
            return;
        }
        let padding = self.options.padding_for_width(viewport_width);
        log::debug!("Kamera auf {:?} (Padding {:?})", bbox.0, padding);
        self.widget.fit_bounds(bbox, padding);
    }

    /// Zerstört Widget, Marker und Popup. Einziger gültiger Aufräumpfad.
    pub fn remove(&mut self) {
        if self.phase == AdapterPhase::Removed {
            log::warn!("Karte wurde bereits entfernt");
            return;
        }
        for (marker, _) in self.markers.drain(..) {
            self.widget.remove_marker(marker);
        }
        self.close_popup();
        self.widget.remove();
        self.phase = AdapterPhase::Removed;
        log::info!("Karte entfernt");
    }
}
