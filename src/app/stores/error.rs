use crate::app::Action;

use super::Store;

/// Snapshot des ErrorStores
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorStoreState {
    /// Angezeigte Fehlermeldung, `None` wenn kein Banner sichtbar ist
    pub last_error: Option<String>,
}

/// Hält die zuletzt fehlgeschlagene Routenanfrage als Meldung vor
#[derive(Default)]
pub struct ErrorStore;

impl Store for ErrorStore {
    type State = ErrorStoreState;

    fn name(&self) -> &'static str {
        "error"
    }

    fn initial_state(&self) -> ErrorStoreState {
        ErrorStoreState::default()
    }

    fn reduce(&self, state: &ErrorStoreState, action: &Action) -> Option<ErrorStoreState> {
        match action {
            Action::RouteRequestFailed { error_message, .. } => {
                log::warn!("Routenanfrage fehlgeschlagen: {}", error_message);
                Some(ErrorStoreState {
                    last_error: Some(error_message.clone()),
                })
            }
            Action::DismissLastError | Action::RouteRequestSuccess { .. } => {
                state.last_error.as_ref()?;
                Some(ErrorStoreState::default())
            }
            Action::InfoReceived { .. }
            | Action::SetPoint { .. }
            | Action::SetVehicleProfile { .. }
            | Action::AddPoint { .. }
            | Action::ClearPoints
            | Action::RemovePoint { .. }
            | Action::InvalidatePoint { .. }
            | Action::ClearRoute
            | Action::SetSelectedPath { .. }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoutingArgs;

    #[test]
    fn test_failure_is_surfaced_and_dismissed() {
        let failed = ErrorStore
            .reduce(
                &ErrorStoreState::default(),
                &Action::RouteRequestFailed {
                    request: RoutingArgs::default(),
                    error_message: "Punkt nicht gefunden".to_string(),
                },
            )
            .unwrap();
        assert_eq!(failed.last_error.as_deref(), Some("Punkt nicht gefunden"));

        let dismissed = ErrorStore
            .reduce(&failed, &Action::DismissLastError)
            .unwrap();
        assert_eq!(dismissed.last_error, None);
    }

    #[test]
    fn test_dismiss_without_error_is_ignored() {
        assert!(ErrorStore
            .reduce(&ErrorStoreState::default(), &Action::DismissLastError)
            .is_none());
    }
}
