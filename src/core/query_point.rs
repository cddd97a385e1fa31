//! Wegpunkte einer Routenanfrage.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Ein Wegpunkt (Start, Zwischenziel oder Ziel).
///
/// Identität ist `id`. `is_initialized == false` markiert einen noch nicht
/// geokodierten Platzhalter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPoint {
    pub id: u32,
    pub coordinate: Option<Coordinate>,
    pub is_initialized: bool,
    /// Marker-Farbe als CSS-Farbwert
    pub color: String,
    /// Suchtext bzw. Adresse im Eingabefeld
    pub query_text: String,
}

impl QueryPoint {
    /// Platzhalter ohne Koordinate
    pub fn placeholder(id: u32, color: impl Into<String>) -> Self {
        Self {
            id,
            coordinate: None,
            is_initialized: false,
            color: color.into(),
            query_text: String::new(),
        }
    }

    /// Initialisierter Wegpunkt; der Suchtext ist die formatierte Koordinate
    pub fn at(id: u32, coordinate: Coordinate, color: impl Into<String>) -> Self {
        Self {
            id,
            coordinate: Some(coordinate),
            is_initialized: true,
            color: color.into(),
            query_text: coordinate.to_string(),
        }
    }

    /// Koordinate, falls der Punkt initialisiert ist
    pub fn initialized_coordinate(&self) -> Option<Coordinate> {
        if self.is_initialized {
            self.coordinate
        } else {
            None
        }
    }
}
