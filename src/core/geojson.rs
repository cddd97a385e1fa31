//! Minimaler GeoJSON-Ausschnitt: genau das, was Routen-Layer und Backend-Pfade brauchen.

use serde::{Deserialize, Serialize};

/// Linien-Geometrie mit Positionen in `[lng, lat]`-Reihenfolge
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<[f64; 2]>,
}

impl LineString {
    /// Erstellt eine Linie aus `[lng, lat]`-Positionen
    pub fn new(coordinates: Vec<[f64; 2]>) -> Self {
        Self { coordinates }
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }
}

/// GeoJSON-Geometrie, über das `type`-Feld unterschieden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString(LineString),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
enum FeatureTag {
    #[default]
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
enum FeatureCollectionTag {
    #[default]
    FeatureCollection,
}

/// Einzelnes GeoJSON-Feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub geometry: Geometry,
}

impl Feature {
    /// Feature ohne Properties
    pub fn new(geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            properties: serde_json::Map::new(),
            geometry,
        }
    }
}

/// GeoJSON-FeatureCollection als Datenquelle eines Karten-Layers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Leere Collection (Layer zeigt nichts an)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collection mit genau einem Feature
    pub fn single(feature: Feature) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features: vec![feature],
        }
    }
}
