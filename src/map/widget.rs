//! Vertrag zum extern verwalteten Karten-Widget.

use super::PopupContent;
use crate::core::{Bbox, Coordinate, FeatureCollection};
use crate::shared::options::{Padding, PopupOptions};

/// Kennung eines vom Widget erzeugten Markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Eigenschaften eines neuen Markers
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub coordinate: Coordinate,
    /// CSS-Farbwert
    pub color: String,
    pub draggable: bool,
}

/// Darstellung des Routen-Linien-Layers
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayerStyle {
    pub line_color: String,
    pub line_width: f32,
    /// `line-join: round`
    pub round_join: bool,
    /// `line-cap: round`
    pub round_cap: bool,
}

/// Ereignisse, die das Widget an den Adapter meldet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// Erster Ladevorgang abgeschlossen
    Loaded,
    /// Linksklick in die Karte
    Click { coordinate: Coordinate },
    /// Rechtsklick bzw. Long-Press
    ContextMenu { coordinate: Coordinate },
    /// Marker wurde per Drag an eine neue Position gezogen
    MarkerDragEnd {
        marker: MarkerId,
        coordinate: Coordinate,
    },
}

/// Imperative Primitive eines Karten-Widgets (z.B. mapbox-gl).
///
/// Implementierungen gehören dem Host; der Adapter erzeugt und entfernt nur,
/// was er selbst angelegt hat.
pub trait MapWidget {
    /// Legt eine benannte GeoJSON-Quelle an
    fn add_geojson_source(&mut self, key: &str, data: FeatureCollection) -> anyhow::Result<()>;

    /// Legt einen Linien-Layer auf einer bestehenden Quelle an
    fn add_line_layer(
        &mut self,
        layer_key: &str,
        source_key: &str,
        style: &LineLayerStyle,
    ) -> anyhow::Result<()>;

    /// Ersetzt die Daten einer bestehenden Quelle
    fn set_source_data(&mut self, key: &str, data: FeatureCollection) -> anyhow::Result<()>;

    /// Erzeugt einen Marker, noch nicht an der Karte angehängt
    fn create_marker(&mut self, options: MarkerOptions) -> MarkerId;

    /// Hängt einen erzeugten Marker an die Karte an
    fn attach_marker(&mut self, marker: MarkerId);

    /// Entfernt einen Marker von der Karte
    fn remove_marker(&mut self, marker: MarkerId);

    /// Zeigt das (einzige) Popup an `coordinate` mit neuem Inhalt
    fn show_popup(&mut self, coordinate: Coordinate, content: &PopupContent, options: &PopupOptions);

    /// Schließt das Popup, falls offen
    fn close_popup(&mut self);

    /// Animiert die Kamera auf die Bounding-Box
    fn fit_bounds(&mut self, bbox: Bbox, padding: Padding);

    /// Zerstört das Widget
    fn remove(&mut self);
}
