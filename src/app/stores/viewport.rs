//! Kamera-Ziel der Karte.

use crate::app::Action;
use crate::core::{Bbox, ViewportStoreState};

use super::Store;

/// Was die Kamera als Nächstes zeigen soll. Nie beides in einem Update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraTarget {
    /// Zentrum + Zoom
    Viewport(ViewportStoreState),
    /// Bounding-Box einpassen
    Bbox(Bbox),
}

/// Snapshot des ViewportStores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub target: CameraTarget,
}

impl ViewportState {
    /// Bbox für `fit_bounds`, Sentinel wenn die Kamera per Viewport gesteuert wird
    pub fn bbox(&self) -> Bbox {
        match self.target {
            CameraTarget::Bbox(bbox) => bbox,
            CameraTarget::Viewport(_) => Bbox::UNSET,
        }
    }
}

#[derive(Default)]
pub struct ViewportStore;

impl ViewportStore {
    fn fit(bbox: Bbox) -> Option<ViewportState> {
        Some(ViewportState {
            target: CameraTarget::Bbox(bbox),
        })
    }
}

impl Store for ViewportStore {
    type State = ViewportState;

    fn name(&self) -> &'static str {
        "viewport"
    }

    fn initial_state(&self) -> ViewportState {
        ViewportState {
            target: CameraTarget::Viewport(ViewportStoreState::default()),
        }
    }

    fn reduce(&self, _state: &ViewportState, action: &Action) -> Option<ViewportState> {
        match action {
            Action::SetViewport { viewport } => Some(ViewportState {
                target: CameraTarget::Viewport(*viewport),
            }),
            Action::SetViewportToBbox { bbox } => Self::fit(*bbox),
            Action::PathDetailsRangeSelected { bbox: Some(bbox) } => Self::fit(*bbox),
            Action::InfoReceived { result } if !result.bbox.is_unset() => Self::fit(result.bbox),
            Action::RouteRequestSuccess { result, .. } => {
                let bbox = result.paths.first().and_then(|p| p.bbox)?;
                Self::fit(bbox)
            }
            Action::PathDetailsRangeSelected { bbox: None }
            | Action::InfoReceived { .. }
            | Action::SetPoint { .. }
            | Action::SetVehicleProfile { .. }
            | Action::AddPoint { .. }
            | Action::ClearPoints
            | Action::RemovePoint { .. }
            | Action::InvalidatePoint { .. }
            | Action::RouteRequestFailed { .. }
            | Action::ClearRoute
            | Action::SetSelectedPath { .. }
            | Action::DismissLastError
            | Action::SelectMapStyle { .. }
            | Action::MapIsLoaded
            | Action::PathDetailsHover { .. }
            | Action::PathDetailsElevationSelected { .. } => None,
        }
    }
}
