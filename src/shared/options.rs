//! Zentrale Konfiguration für Karten-Abgleich und Stores.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kartenstil ──────────────────────────────────────────────────────

/// Standard-Basemap.
pub const STYLE_URL: &str = "mapbox://styles/mapbox/streets-v11";

// ── Routen-Layer ────────────────────────────────────────────────────

/// Schlüssel der GeoJSON-Quelle für die Route.
pub const ROUTE_SOURCE_KEY: &str = "route";
/// Schlüssel des Linien-Layers für die Route.
pub const ROUTE_LAYER_KEY: &str = "lines";
/// Linienfarbe der Route.
pub const ROUTE_LINE_COLOR: &str = "#888";
/// Linienbreite der Route in Pixeln.
pub const ROUTE_LINE_WIDTH: f32 = 8.0;

// ── Kamera ──────────────────────────────────────────────────────────

/// Viewport-Breite (inklusive), bis zu der das schmale Layout gilt.
pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 640.0;

// ── Wegpunkt-Farben ─────────────────────────────────────────────────

/// Marker-Farbe des Startpunkts.
pub const START_COLOR: &str = "#417900";
/// Marker-Farbe von Zwischenzielen.
pub const VIA_COLOR: &str = "#76D0F7";
/// Marker-Farbe des Ziels.
pub const END_COLOR: &str = "#F97777";

/// Innenabstand beim Einpassen einer Bounding-Box (Pixel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    /// Breites Layout: links Platz für das Seitenpanel
    pub const WIDE: Padding = Padding {
        top: 100.0,
        bottom: 100.0,
        left: 400.0,
        right: 100.0,
    };

    /// Schmales Layout: oben Platz für den Header
    pub const NARROW: Padding = Padding {
        top: 200.0,
        bottom: 16.0,
        left: 16.0,
        right: 16.0,
    };
}

/// Verhalten des gemeinsamen Popups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupOptions {
    /// Popup schließen, sobald sich die Kamera bewegt
    pub close_on_move: bool,
    /// Popup bei Klick in die Karte schließen
    pub close_on_click: bool,
    /// Schließen-Button anzeigen
    pub close_button: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            close_on_move: true,
            close_on_click: true,
            close_button: false,
        }
    }
}

/// Farben der Wegpunkte nach Position in der Route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPointColors {
    pub start: String,
    pub via: String,
    pub end: String,
}

impl Default for QueryPointColors {
    fn default() -> Self {
        Self {
            start: START_COLOR.to_string(),
            via: VIA_COLOR.to_string(),
            end: END_COLOR.to_string(),
        }
    }
}

impl QueryPointColors {
    /// Farbe für Position `index` in einer Route mit `len` Punkten
    pub fn for_position(&self, index: usize, len: usize) -> &str {
        if index == 0 {
            &self.start
        } else if index + 1 == len {
            &self.end
        } else {
            &self.via
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `routing_map_sync.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Basemap-Stil
    pub style_url: String,
    /// Zugangs-Token des Kartenanbieters
    pub access_token: Option<String>,

    // ── Route ───────────────────────────────────────────────────
    /// Linienfarbe der Route
    pub route_line_color: String,
    /// Linienbreite der Route in Pixeln
    pub route_line_width: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Breakpoint für das schmale (mobile) Layout
    pub narrow_viewport_max_width: f32,

    // ── Marker & Popup ──────────────────────────────────────────
    /// Marker per Drag verschiebbar
    pub marker_draggable: bool,

    // Tabellen zuletzt (TOML-Reihenfolge)
    /// Padding im breiten Layout
    pub padding_wide: Padding,
    /// Padding im schmalen Layout
    pub padding_narrow: Padding,
    /// Farben für Start/Zwischenziel/Ziel
    pub query_point_colors: QueryPointColors,
    /// Popup-Verhalten
    pub popup: PopupOptions,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            style_url: STYLE_URL.to_string(),
            access_token: None,

            route_line_color: ROUTE_LINE_COLOR.to_string(),
            route_line_width: ROUTE_LINE_WIDTH,

            narrow_viewport_max_width: NARROW_VIEWPORT_MAX_WIDTH,

            marker_draggable: true,
            padding_wide: Padding::WIDE,
            padding_narrow: Padding::NARROW,
            query_point_colors: QueryPointColors::default(),
            popup: PopupOptions::default(),
        }
    }
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("routing_map_sync"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("routing_map_sync.toml")
    }

    /// Padding für die aktuelle Viewport-Breite.
    ///
    /// Wird bei jedem Aufruf neu ausgewertet; `max-width`-Semantik (inklusive).
    pub fn padding_for_width(&self, viewport_width: f32) -> Padding {
        if viewport_width <= self.narrow_viewport_max_width {
            self.padding_narrow
        } else {
            self.padding_wide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_switches_at_breakpoint() {
        let options = MapOptions::default();
        assert_eq!(options.padding_for_width(320.0), Padding::NARROW);
        assert_eq!(options.padding_for_width(640.0), Padding::NARROW);
        assert_eq!(options.padding_for_width(641.0), Padding::WIDE);
        assert_eq!(options.padding_for_width(1920.0), Padding::WIDE);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let parsed: MapOptions = toml::from_str(
            r##"
route_line_color = "#00f"
narrow_viewport_max_width = 800.0
"##,
        )
        .expect("Teil-Konfiguration sollte parsen");

        assert_eq!(parsed.route_line_color, "#00f");
        assert_eq!(parsed.narrow_viewport_max_width, 800.0);
        assert_eq!(parsed.style_url, STYLE_URL);
        assert_eq!(parsed.padding_wide, Padding::WIDE);
        assert!(parsed.marker_draggable);
    }

    #[test]
    fn test_toml_roundtrip_keeps_options() {
        let mut options = MapOptions::default();
        options.access_token = Some("pk.test".to_string());
        options.padding_narrow.top = 150.0;

        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: MapOptions = toml::from_str(&text).unwrap();

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("routing_map_sync_does_not_exist.toml");
        assert_eq!(MapOptions::load_from_file(&path), MapOptions::default());
    }

    #[test]
    fn test_colors_by_position() {
        let colors = QueryPointColors::default();
        assert_eq!(colors.for_position(0, 3), START_COLOR);
        assert_eq!(colors.for_position(1, 3), VIA_COLOR);
        assert_eq!(colors.for_position(2, 3), END_COLOR);
        assert_eq!(colors.for_position(0, 1), START_COLOR);
    }
}
