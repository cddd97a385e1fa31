use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Kamera-Beschreibung über Zentrum und Zoom (unabhängig von einer Bbox)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportStoreState {
    pub center: Coordinate,
    pub zoom: f64,
}

impl Default for ViewportStoreState {
    fn default() -> Self {
        Self {
            center: Coordinate::new(50.0, 10.0),
            zoom: 5.0,
        }
    }
}
