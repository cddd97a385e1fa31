//! Wegpunkte der aktuellen Routenanfrage und gewähltes Routing-Profil.

use crate::app::Action;
use crate::core::{Coordinate, QueryPoint, RoutingProfile};
use crate::shared::options::QueryPointColors;

use super::Store;

/// Snapshot des QueryStores
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStoreState {
    /// Wegpunkte in Routen-Reihenfolge (mindestens zwei)
    pub query_points: Vec<QueryPoint>,
    /// Nächste freie Wegpunkt-ID
    pub next_query_point_id: u32,
    pub routing_profile: RoutingProfile,
}

impl QueryStoreState {
    /// Koordinaten aller initialisierten Wegpunkte in Routen-Reihenfolge
    pub fn initialized_coordinates(&self) -> Vec<Coordinate> {
        self.query_points
            .iter()
            .filter_map(QueryPoint::initialized_coordinate)
            .collect()
    }

    /// `true`, wenn alle Wegpunkte geokodiert sind und eine Route angefragt werden kann
    pub fn is_routable(&self) -> bool {
        self.query_points.len() >= 2 && self.query_points.iter().all(|p| p.is_initialized)
    }
}

/// Verwaltet die Wegpunkte
pub struct QueryStore {
    colors: QueryPointColors,
}

impl QueryStore {
    pub fn new(colors: QueryPointColors) -> Self {
        Self { colors }
    }

    fn placeholders(&self, first_id: u32) -> Vec<QueryPoint> {
        vec![
            QueryPoint::placeholder(first_id, self.colors.start.as_str()),
            QueryPoint::placeholder(first_id + 1, self.colors.end.as_str()),
        ]
    }

    /// Färbt alle Punkte nach ihrer Position neu (Start/Zwischenziel/Ziel)
    fn recolor(&self, points: &mut [QueryPoint]) {
        let len = points.len();
        for (i, point) in points.iter_mut().enumerate() {
            point.color = self.colors.for_position(i, len).to_string();
        }
    }

    fn replace_point(
        &self,
        state: &QueryStoreState,
        id: u32,
        update: impl FnOnce(&mut QueryPoint),
    ) -> Option<QueryStoreState> {
        let Some(index) = state.query_points.iter().position(|p| p.id == id) else {
            log::warn!("Wegpunkt {} existiert nicht", id);
            return None;
        };
        let mut next = state.clone();
        update(&mut next.query_points[index]);
        Some(next)
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new(QueryPointColors::default())
    }
}

impl Store for QueryStore {
    type State = QueryStoreState;

    fn name(&self) -> &'static str {
        "query"
    }

    fn initial_state(&self) -> QueryStoreState {
        QueryStoreState {
            query_points: self.placeholders(0),
            next_query_point_id: 2,
            routing_profile: RoutingProfile::default(),
        }
    }

    fn reduce(&self, state: &QueryStoreState, action: &Action) -> Option<QueryStoreState> {
        match action {
            Action::SetPoint { point } => {
                let point = point.clone();
                self.replace_point(state, point.id, |slot| *slot = point)
            }
            Action::AddPoint {
                at_index,
                coordinate,
                is_initialized,
            } => {
                let mut next = state.clone();
                let index = (*at_index).min(next.query_points.len());
                let query_text = if *is_initialized {
                    coordinate.to_string()
                } else {
                    String::new()
                };
                next.query_points.insert(
                    index,
                    QueryPoint {
                        id: next.next_query_point_id,
                        coordinate: Some(*coordinate),
                        is_initialized: *is_initialized,
                        color: String::new(),
                        query_text,
                    },
                );
                next.next_query_point_id += 1;
                self.recolor(&mut next.query_points);
                Some(next)
            }
            Action::ClearPoints => Some(QueryStoreState {
                query_points: self.placeholders(state.next_query_point_id),
                next_query_point_id: state.next_query_point_id + 2,
                routing_profile: state.routing_profile.clone(),
            }),
            Action::RemovePoint { point } => {
                if !state.query_points.iter().any(|p| p.id == point.id) {
                    log::warn!("Wegpunkt {} existiert nicht", point.id);
                    return None;
                }
                let mut next = state.clone();
                next.query_points.retain(|p| p.id != point.id);
                // Start und Ziel bleiben immer als Platzhalter erhalten
                while next.query_points.len() < 2 {
                    next.query_points
                        .push(QueryPoint::placeholder(next.next_query_point_id, ""));
                    next.next_query_point_id += 1;
                }
                self.recolor(&mut next.query_points);
                Some(next)
            }
            Action::InvalidatePoint { point } => {
                self.replace_point(state, point.id, |slot| slot.is_initialized = false)
            }
            Action::SetVehicleProfile { profile } => Some(QueryStoreState {
                routing_profile: profile.clone(),
                ..state.clone()
            }),
            Action::InfoReceived { result } => {
                if !state.routing_profile.is_unset() {
                    return None;
                }
                let profile = result.profiles.first()?;
                Some(QueryStoreState {
                    routing_profile: profile.clone(),
                    ..state.clone()
                })
            }
            Action::RouteRequestSuccess { .. }
            | Action::RouteRequestFailed { .. }
            | Action::ClearRoute
            | Action::SetSelectedPath { .. }
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
