//! Inhalt des Kontextmenü-Popups und Abbildung der Auswahl auf Actions.

use crate::app::Action;
use crate::core::{Coordinate, QueryPoint};

/// Auswahl im Popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    /// Angeklickte Position als Start setzen
    SetAsStart,
    /// Als Zwischenziel vor dem Ziel einfügen
    AddViaPoint,
    /// Angeklickte Position als Ziel setzen
    SetAsEnd,
}

impl PopupAction {
    /// Beschriftung im Popup
    pub fn label(self) -> &'static str {
        match self {
            PopupAction::SetAsStart => "Route von hier",
            PopupAction::AddViaPoint => "Zwischenziel hier",
            PopupAction::SetAsEnd => "Route hierhin",
        }
    }

    /// Baut die Action für die Auswahl an `coordinate`.
    ///
    /// `None`, wenn keine Wegpunkte existieren.
    pub fn to_action(self, coordinate: Coordinate, query_points: &[QueryPoint]) -> Option<Action> {
        let located = |point: &QueryPoint| QueryPoint {
            coordinate: Some(coordinate),
            is_initialized: true,
            query_text: coordinate.to_string(),
            ..point.clone()
        };

        match self {
            PopupAction::SetAsStart => Some(Action::SetPoint {
                point: located(query_points.first()?),
            }),
            PopupAction::SetAsEnd => Some(Action::SetPoint {
                point: located(query_points.last()?),
            }),
            PopupAction::AddViaPoint => {
                if query_points.is_empty() {
                    return None;
                }
                Some(Action::AddPoint {
                    at_index: query_points.len() - 1,
                    coordinate,
                    is_initialized: true,
                })
            }
        }
    }
}

/// Daten eines Popups an einer Kartenposition
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    /// Überschrift (formatierte Koordinate)
    pub title: String,
    pub actions: Vec<PopupAction>,
}

impl PopupContent {
    /// Kontextmenü für einen Rechtsklick.
    ///
    /// Zwischenziele werden nur angeboten, wenn Start und Ziel schon gesetzt sind.
    pub fn for_coordinate(coordinate: Coordinate, query_points: &[QueryPoint]) -> Self {
        let endpoints_set = query_points.len() >= 2
            && query_points.first().is_some_and(|p| p.is_initialized)
            && query_points.last().is_some_and(|p| p.is_initialized);

        let mut actions = vec![PopupAction::SetAsStart];
        if endpoints_set {
            actions.push(PopupAction::AddViaPoint);
        }
        actions.push(PopupAction::SetAsEnd);

        Self {
            title: coordinate.to_string(),
            actions,
        }
    }
}
