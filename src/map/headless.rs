//! In-Memory-Karten-Widget ohne Darstellung.
//!
//! Hält den sichtbaren Zustand als Daten vor: Quellen, Layer, Marker, Popup
//! und Kamerafahrten. Dient als Widget für Tests und den Demo-Lauf.

use super::{LineLayerStyle, MapWidget, MarkerId, MarkerOptions, PopupContent};
use crate::core::{Bbox, Coordinate, FeatureCollection};
use crate::shared::options::{Padding, PopupOptions};
use indexmap::IndexMap;

/// Marker im Widget
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMarker {
    pub options: MarkerOptions,
    /// An der Karte angehängt
    pub attached: bool,
}

/// Geöffnetes Popup
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessPopup {
    pub coordinate: Coordinate,
    pub content: PopupContent,
    pub options: PopupOptions,
}

#[derive(Debug, Clone, PartialEq)]
struct HeadlessLayer {
    source_key: String,
    style: LineLayerStyle,
}

#[derive(Debug, Default)]
pub struct HeadlessMap {
    sources: IndexMap<String, FeatureCollection>,
    layers: IndexMap<String, HeadlessLayer>,
    markers: IndexMap<MarkerId, HeadlessMarker>,
    next_marker_id: u64,
    popup: Option<HeadlessPopup>,
    camera_fits: Vec<(Bbox, Padding)>,
    remove_count: usize,
    mutation_count: usize,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Daten einer Quelle
    pub fn source(&self, key: &str) -> Option<&FeatureCollection> {
        self.sources.get(key)
    }

    pub fn layer(&self, key: &str) -> Option<&LineLayerStyle> {
        self.layers.get(key).map(|layer| &layer.style)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// IDs der angehängten Marker in Anhänge-Reihenfolge
    pub fn attached_marker_ids(&self) -> Vec<MarkerId> {
        self.markers
            .iter()
            .filter(|(_, m)| m.attached)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Angehängte Marker in Anhänge-Reihenfolge
    pub fn attached_markers(&self) -> Vec<&MarkerOptions> {
        self.markers
            .values()
            .filter(|m| m.attached)
            .map(|m| &m.options)
            .collect()
    }

    /// Alle noch existierenden Marker, auch nicht angehängte
    pub fn marker(&self, id: MarkerId) -> Option<&HeadlessMarker> {
        self.markers.get(&id)
    }

    pub fn popup(&self) -> Option<&HeadlessPopup> {
        self.popup.as_ref()
    }

    /// Alle bisherigen `fit_bounds`-Aufrufe
    pub fn camera_fits(&self) -> &[(Bbox, Padding)] {
        &self.camera_fits
    }

    pub fn is_removed(&self) -> bool {
        self.remove_count > 0
    }

    /// Wie oft `remove()` aufgerufen wurde
    pub fn remove_count(&self) -> usize {
        self.remove_count
    }

    /// Anzahl aller zustandsändernden Aufrufe
    pub fn mutation_count(&self) -> usize {
        self.mutation_count
    }
}

impl MapWidget for HeadlessMap {
    fn add_geojson_source(&mut self, key: &str, data: FeatureCollection) -> anyhow::Result<()> {
        if self.sources.contains_key(key) {
            anyhow::bail!("Quelle '{}' existiert bereits", key);
        }
        self.mutation_count += 1;
        self.sources.insert(key.to_string(), data);
        Ok(())
    }

    fn add_line_layer(
        &mut self,
        layer_key: &str,
        source_key: &str,
        style: &LineLayerStyle,
    ) -> anyhow::Result<()> {
        if self.layers.contains_key(layer_key) {
            anyhow::bail!("Layer '{}' existiert bereits", layer_key);
        }
        if !self.sources.contains_key(source_key) {
            anyhow::bail!("Quelle '{}' existiert nicht", source_key);
        }
        self.mutation_count += 1;
        self.layers.insert(
            layer_key.to_string(),
            HeadlessLayer {
                source_key: source_key.to_string(),
                style: style.clone(),
            },
        );
        Ok(())
    }

    fn set_source_data(&mut self, key: &str, data: FeatureCollection) -> anyhow::Result<()> {
        let Some(source) = self.sources.get_mut(key) else {
            anyhow::bail!("Quelle '{}' existiert nicht", key);
        };
        self.mutation_count += 1;
        *source = data;
        Ok(())
    }

    fn create_marker(&mut self, options: MarkerOptions) -> MarkerId {
        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;
        self.markers.insert(
            id,
            HeadlessMarker {
                options,
                attached: false,
            },
        );
        id
    }

    fn attach_marker(&mut self, marker: MarkerId) {
        if let Some(m) = self.markers.get_mut(&marker) {
            self.mutation_count += 1;
            m.attached = true;
        }
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        if self.markers.shift_remove(&marker).is_some() {
            self.mutation_count += 1;
        }
    }

    fn show_popup(&mut self, coordinate: Coordinate, content: &PopupContent, options: &PopupOptions) {
        self.mutation_count += 1;
        self.popup = Some(HeadlessPopup {
            coordinate,
            content: content.clone(),
            options: *options,
        });
    }

    fn close_popup(&mut self) {
        if self.popup.take().is_some() {
            self.mutation_count += 1;
        }
    }

    fn fit_bounds(&mut self, bbox: Bbox, padding: Padding) {
        self.mutation_count += 1;
        self.camera_fits.push((bbox, padding));
    }

    fn remove(&mut self) {
        self.mutation_count += 1;
        self.remove_count += 1;
        self.sources.clear();
        self.layers.clear();
        self.markers.clear();
        self.popup = None;
    }
}
