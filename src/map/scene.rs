//! Deklarativer Übergabevertrag zwischen Stores und Karten-Adapter.

use crate::app::{QueryStoreState, RouteStoreState, ViewportState};
use crate::core::{Bbox, Path, QueryPoint};
use std::rc::Rc;

/// Read-only Snapshots für einen Abgleich. Klonen ist O(1).
#[derive(Debug, Clone)]
pub struct MapScene {
    pub route: Rc<RouteStoreState>,
    pub query: Rc<QueryStoreState>,
    pub viewport: Rc<ViewportState>,
}

impl MapScene {
    /// Gewählter Pfad
    pub fn path(&self) -> &Path {
        &self.route.selected_path
    }

    pub fn query_points(&self) -> &[QueryPoint] {
        &self.query.query_points
    }

    /// Einzupassende Bbox oder Sentinel
    pub fn bbox(&self) -> Bbox {
        self.viewport.bbox()
    }

    /// Slices, die sich gegenüber `previous` geändert haben (Snapshot-Identität)
    pub(super) fn changes_since(&self, previous: Option<&MapScene>) -> SceneChanges {
        match previous {
            None => SceneChanges::all(),
            Some(prev) => SceneChanges {
                path: !Rc::ptr_eq(&self.route, &prev.route),
                markers: !Rc::ptr_eq(&self.query, &prev.query),
                bounds: !Rc::ptr_eq(&self.viewport, &prev.viewport),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct SceneChanges {
    pub path: bool,
    pub markers: bool,
    pub bounds: bool,
}

impl SceneChanges {
    fn all() -> Self {
        Self {
            path: true,
            markers: true,
            bounds: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{QueryStore, RouteStore, Store, ViewportStore};

    fn scene() -> MapScene {
        MapScene {
            route: Rc::new(RouteStore.initial_state()),
            query: Rc::new(QueryStore::default().initial_state()),
            viewport: Rc::new(ViewportStore.initial_state()),
        }
    }

    #[test]
    fn test_first_scene_changes_everything() {
        assert_eq!(scene().changes_since(None), SceneChanges::all());
    }

    #[test]
    fn test_only_replaced_snapshot_counts_as_change() {
        let first = scene();
        let mut second = first.clone();
        // Gleicher Inhalt, aber neuer Snapshot
        second.query = Rc::new((*first.query).clone());

        let changes = second.changes_since(Some(&first));

        assert!(!changes.path);
        assert!(changes.markers);
        assert!(!changes.bounds);
    }
}
