//! Zuletzt berechnete Route und der davon gewählte Pfad.

use crate::app::Action;
use crate::core::{Path, RoutingResult};

use super::Store;

/// Snapshot des RouteStores
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteStoreState {
    pub routing_result: RoutingResult,
    /// Angezeigter Pfad (leer, wenn keine Route vorliegt)
    pub selected_path: Path,
}

#[derive(Default)]
pub struct RouteStore;

impl RouteStore {
    fn cleared(state: &RouteStoreState) -> Option<RouteStoreState> {
        if *state == RouteStoreState::default() {
            None
        } else {
            Some(RouteStoreState::default())
        }
    }
}

impl Store for RouteStore {
    type State = RouteStoreState;

    fn name(&self) -> &'static str {
        "route"
    }

    fn initial_state(&self) -> RouteStoreState {
        RouteStoreState::default()
    }

    fn reduce(&self, state: &RouteStoreState, action: &Action) -> Option<RouteStoreState> {
        match action {
            Action::RouteRequestSuccess { result, .. } => {
                log::info!("Route empfangen: {} Pfad(e)", result.paths.len());
                Some(RouteStoreState {
                    selected_path: result.paths.first().cloned().unwrap_or_default(),
                    routing_result: result.clone(),
                })
            }
            Action::SetSelectedPath { path } => Some(RouteStoreState {
                selected_path: path.clone(),
                ..state.clone()
            }),
            Action::ClearRoute
            | Action::ClearPoints
            | Action::RemovePoint { .. }
            | Action::InvalidatePoint { .. } => Self::cleared(state),
            Action::InfoReceived { .. }
            | Action::SetPoint { .. }
            | Action::SetVehicleProfile { .. }
            | Action::AddPoint { .. }
            | Action::RouteRequestFailed { .. }
            | Action::DismissLastError
            | Action::SelectMapStyle { .. }
            | Action::MapIsLoaded
            | Action::SetViewport { .. }
            | Action::SetViewportToBbox { .. }
            | Action::PathDetailsHover { .. }
            | Action::PathDetailsRangeSelected { .. }
            | Action::PathDetailsElevationSelected { .. } => None,
        }
    }
}
