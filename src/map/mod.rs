//! Karten-Abgleich: hält ein zustandsbehaftetes Karten-Widget deckungsgleich
//! mit dem deklarativen Zustand aus den Stores.
//!
//! Struktur:
//! - `widget.rs`: `MapWidget`-Trait (imperative Widget-Primitive) + `MapEvent`
//! - `adapter.rs`: `MapAdapter` (Lebenszyklus, draw_line/draw_markers/draw_popup/fit_bounds)
//! - `headless.rs`: In-Memory-Widget ohne Darstellung
//! - `popup.rs`: Inhalt des Kontextmenü-Popups
//! - `scene.rs`: deklaratives Tripel (Pfad, Wegpunkte, Bbox) aus den Store-Snapshots
//! - `view.rs`: `MapView` bindet Stores an den Adapter

mod adapter;
mod headless;
mod popup;
mod scene;
mod view;
mod widget;

pub use adapter::{AdapterPhase, MapAdapter, MapCallbacks};
pub use headless::{HeadlessMap, HeadlessMarker, HeadlessPopup};
pub use popup::{PopupAction, PopupContent};
pub use scene::MapScene;
pub use view::{MapStores, MapView};
pub use widget::{LineLayerStyle, MapEvent, MapWidget, MarkerId, MarkerOptions};
