use crate::app::Action;
use crate::core::{Bbox, Coordinate, PathDetailsPoint};

use super::Store;

/// Snapshot der Höhenprofil-Interaktion
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathDetailsState {
    pub hover_point: Option<PathDetailsPoint>,
    pub range_bbox: Option<Bbox>,
    /// Hervorgehobene Teilsegmente
    pub elevation_segments: Vec<Vec<Coordinate>>,
}

#[derive(Default)]
pub struct PathDetailsStore;

impl Store for PathDetailsStore {
    type State = PathDetailsState;

    fn name(&self) -> &'static str {
        "path_details"
    }

    fn initial_state(&self) -> PathDetailsState {
        PathDetailsState::default()
    }

    fn reduce(&self, state: &PathDetailsState, action: &Action) -> Option<PathDetailsState> {
        match action {
            Action::PathDetailsHover { path_details_point } => Some(PathDetailsState {
                hover_point: path_details_point.clone(),
                ..state.clone()
            }),
            Action::PathDetailsRangeSelected { bbox } => Some(PathDetailsState {
                range_bbox: *bbox,
                ..state.clone()
            }),
            Action::PathDetailsElevationSelected { segments } => Some(PathDetailsState {
                elevation_segments: segments.clone(),
                ..state.clone()
            }),
            // Neue oder verworfene Route: Profil-Auswahl gilt nicht mehr
            Action::RouteRequestSuccess { .. }
            | Action::SetSelectedPath { .. }
            | Action::ClearRoute => {
                if *state == PathDetailsState::default() {
                    None
                } else {
                    Some(PathDetailsState::default())
                }
            }
            Action::InfoReceived { .. }
            | Action::SetPoint { .. }
            | Action::SetVehicleProfile { .. }
            | Action::AddPoint { .. }
            | Action::ClearPoints
            | Action::RemovePoint { .. }
            | Action::InvalidatePoint { .. }
            | Action::RouteRequestFailed { .. }
            | Action::DismissLastError
            | Action::SelectMapStyle { .. }
            | Action::MapIsLoaded
            | Action::SetViewport { .. }
            | Action::SetViewportToBbox { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_range_and_segments_are_tracked() {
        let hover = PathDetailsPoint {
            point: Coordinate::new(47.0, 11.0),
            elevation: 812.0,
            description: "Anstieg".to_string(),
        };
        let state = PathDetailsStore
            .reduce(
                &PathDetailsState::default(),
                &Action::PathDetailsHover {
                    path_details_point: Some(hover.clone()),
                },
            )
            .unwrap();
        let state = PathDetailsStore
            .reduce(
                &state,
                &Action::PathDetailsElevationSelected {
                    segments: vec![vec![Coordinate::new(47.0, 11.0), Coordinate::new(47.1, 11.1)]],
                },
            )
            .unwrap();

        assert_eq!(state.hover_point, Some(hover));
        assert_eq!(state.elevation_segments.len(), 1);

        let cleared = PathDetailsStore.reduce(&state, &Action::ClearRoute).unwrap();
        assert_eq!(cleared, PathDetailsState::default());
    }
}
