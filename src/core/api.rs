//! Antwort- und Anfrageformen des Routing-Backends, soweit sie durch den Kern fließen.

use super::{Bbox, Path};
use serde::{Deserialize, Serialize};

/// Routing-Modus (z.B. `car`, `bike`, `foot`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutingProfile {
    pub name: String,
}

impl RoutingProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `true`, wenn noch kein Profil gewählt wurde
    pub fn is_unset(&self) -> bool {
        self.name.is_empty()
    }
}

/// Fähigkeiten des Backends (`/info`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiInfo {
    pub version: String,
    pub profiles: Vec<RoutingProfile>,
    /// Abgedecktes Gebiet
    pub bbox: Bbox,
    pub elevation: bool,
}

/// Parameter einer Routenanfrage
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingArgs {
    /// Wegpunkte in `[lng, lat]`
    pub points: Vec<[f64; 2]>,
    pub profile: String,
    pub max_alternative_routes: u32,
}

/// Metadaten einer Routing-Antwort
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingResultInfo {
    /// Rechenzeit in Millisekunden
    pub took: u64,
    pub copyrights: Vec<String>,
}

/// Ergebnis einer Routenanfrage inklusive Alternativen
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingResult {
    pub paths: Vec<Path>,
    pub info: RoutingResultInfo,
}
