use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Cursor-Position im Höhenprofil, auf die Karte projiziert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDetailsPoint {
    pub point: Coordinate,
    /// Höhe in Metern
    pub elevation: f64,
    pub description: String,
}
