//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von Stores und Karten-Adapter
//! gemeinsam gelesen wird.

pub mod options;

pub use options::MapOptions;
pub use options::{Padding, PopupOptions, QueryPointColors};
