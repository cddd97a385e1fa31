//! Vom Routing-Backend berechneter Pfad.

use super::{Bbox, LineString};
use serde::{Deserialize, Serialize};

/// Pfad-Geometrie plus Metadaten. Der Kern behandelt die Geometrie als opak.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub points: LineString,
    /// Distanz in Metern
    pub distance: f64,
    /// Fahrzeit in Millisekunden
    pub time: u64,
    pub ascend: f64,
    pub descend: f64,
    pub bbox: Option<Bbox>,
    /// An das Straßennetz gefangene Wegpunkte
    #[serde(default)]
    pub snapped_waypoints: LineString,
}

impl Path {
    /// Pfad aus einer Linie ohne weitere Metadaten
    pub fn from_points(points: LineString) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Anzahl der Geometrie-Punkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
