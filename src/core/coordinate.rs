//! Geografische Koordinate und Bounding-Box.

use serde::{Deserialize, Serialize};

/// Geografische Position (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl Coordinate {
    /// Erstellt eine neue Koordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Position im GeoJSON-Format `[lng, lat]`
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Erstellt eine Koordinate aus GeoJSON-Reihenfolge `[lng, lat]`
    pub fn from_lng_lat(lng_lat: [f64; 2]) -> Self {
        Self {
            lat: lng_lat[1],
            lng: lng_lat[0],
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

/// Bounding-Box `[min_lng, min_lat, max_lng, max_lat]`.
///
/// Eine Null-Komponente gilt als Sentinel für "nicht gesetzt": die Kamera wird dann nicht bewegt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bbox(pub [f64; 4]);

impl Bbox {
    /// Sentinel: keine Bounding-Box gesetzt
    pub const UNSET: Bbox = Bbox([0.0; 4]);

    /// Erstellt eine Bounding-Box aus den vier Grenzen
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self([min_lng, min_lat, max_lng, max_lat])
    }

    /// `true`, sobald eine der vier Komponenten null ist
    pub fn is_unset(&self) -> bool {
        self.0.iter().any(|v| *v == 0.0)
    }

    pub fn min_lng(&self) -> f64 {
        self.0[0]
    }

    pub fn min_lat(&self) -> f64 {
        self.0[1]
    }

    pub fn max_lng(&self) -> f64 {
        self.0[2]
    }

    pub fn max_lat(&self) -> f64 {
        self.0[3]
    }

    /// Kleinste Box um alle Koordinaten. `None` bei leerer Eingabe.
    pub fn around<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first.lng, first.lat, first.lng, first.lat);
        for c in iter {
            bbox.0[0] = bbox.0[0].min(c.lng);
            bbox.0[1] = bbox.0[1].min(c.lat);
            bbox.0[2] = bbox.0[2].max(c.lng);
            bbox.0[3] = bbox.0[3].max(c.lat);
        }
        Some(bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_bbox_is_unset() {
        assert!(Bbox::UNSET.is_unset());
        assert!(Bbox::default().is_unset());
    }

    #[test]
    fn test_bbox_with_any_zero_component_is_unset() {
        assert!(Bbox::new(0.0, 0.0, 0.0, 1.0).is_unset());
        assert!(Bbox::new(0.0, 48.0, 10.0, 52.0).is_unset());
        assert!(Bbox::new(-3.5, 48.0, 10.0, 0.0).is_unset());
        assert!(!Bbox::new(-3.5, 48.0, 10.0, 52.0).is_unset());
    }

    #[test]
    fn test_bbox_around_coordinates() {
        let bbox = Bbox::around([
            Coordinate::new(52.5, 13.4),
            Coordinate::new(48.1, 11.6),
            Coordinate::new(50.0, 8.7),
        ])
        .expect("Box sollte berechnet werden");

        assert_relative_eq!(bbox.min_lng(), 8.7);
        assert_relative_eq!(bbox.min_lat(), 48.1);
        assert_relative_eq!(bbox.max_lng(), 13.4);
        assert_relative_eq!(bbox.max_lat(), 52.5);
    }

    #[test]
    fn test_bbox_around_empty_is_none() {
        assert!(Bbox::around(std::iter::empty()).is_none());
    }

    #[test]
    fn test_lng_lat_order() {
        let c = Coordinate::new(1.0, 2.0);
        assert_eq!(c.to_lng_lat(), [2.0, 1.0]);
        assert_eq!(Coordinate::from_lng_lat([2.0, 1.0]), c);
    }
}
