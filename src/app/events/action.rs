use crate::core::{
    ApiInfo, Bbox, Coordinate, Path, PathDetailsPoint, QueryPoint, RoutingArgs, RoutingProfile,
    RoutingResult, StyleOption, ViewportStoreState,
};

/// Actions beschreiben jede zustandsändernde Absicht im System.
/// Reine Daten ohne Validierung: die Stores entscheiden, was sie damit tun.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Backend-Fähigkeiten sind eingetroffen
    InfoReceived { result: ApiInfo },
    /// Einen Wegpunkt (per id) ersetzen
    SetPoint { point: QueryPoint },
    /// Routing-Modus wechseln
    SetVehicleProfile { profile: RoutingProfile },
    /// Neuen Wegpunkt an Position einfügen
    AddPoint {
        at_index: usize,
        coordinate: Coordinate,
        is_initialized: bool,
    },
    /// Alle Wegpunkte entfernen
    ClearPoints,
    /// Einen Wegpunkt entfernen
    RemovePoint { point: QueryPoint },
    /// Wegpunkt als nicht geokodiert markieren
    InvalidatePoint { point: QueryPoint },
    /// Routenberechnung abgeschlossen
    RouteRequestSuccess {
        request: RoutingArgs,
        result: RoutingResult,
    },
    /// Routenberechnung fehlgeschlagen
    RouteRequestFailed {
        request: RoutingArgs,
        error_message: String,
    },
    /// Aktuelle Route verwerfen
    ClearRoute,
    /// Nutzer hat eine der alternativen Routen gewählt
    SetSelectedPath { path: Path },
    /// Angezeigte Fehlermeldung schließen
    DismissLastError,
    /// Kartenstil wechseln
    SelectMapStyle { style_option: StyleOption },
    /// Karten-Widget hat den ersten Ladevorgang abgeschlossen
    MapIsLoaded,
    /// Explizite Kamera-Änderung
    SetViewport { viewport: ViewportStoreState },
    /// Kamera soll eine Bounding-Box einpassen
    SetViewportToBbox { bbox: Bbox },
    /// Hover-Cursor im Höhenprofil bewegt (None = verlassen)
    PathDetailsHover {
        path_details_point: Option<PathDetailsPoint>,
    },
    /// Teilbereich im Höhenprofil gewählt (None = Auswahl aufgehoben)
    PathDetailsRangeSelected { bbox: Option<Bbox> },
    /// Nach Höhe eingefärbte Teilsegmente hervorheben
    PathDetailsElevationSelected { segments: Vec<Vec<Coordinate>> },
}

impl Action {
    /// Variant-Name für Logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::InfoReceived { .. } => "InfoReceived",
            Action::SetPoint { .. } => "SetPoint",
            Action::SetVehicleProfile { .. } => "SetVehicleProfile",
            Action::AddPoint { .. } => "AddPoint",
            Action::ClearPoints => "ClearPoints",
            Action::RemovePoint { .. } => "RemovePoint",
            Action::InvalidatePoint { .. } => "InvalidatePoint",
            Action::RouteRequestSuccess { .. } => "RouteRequestSuccess",
            Action::RouteRequestFailed { .. } => "RouteRequestFailed",
            Action::ClearRoute => "ClearRoute",
            Action::SetSelectedPath { .. } => "SetSelectedPath",
            Action::DismissLastError => "DismissLastError",
            Action::SelectMapStyle { .. } => "SelectMapStyle",
            Action::MapIsLoaded => "MapIsLoaded",
            Action::SetViewport { .. } => "SetViewport",
            Action::SetViewportToBbox { .. } => "SetViewportToBbox",
            Action::PathDetailsHover { .. } => "PathDetailsHover",
            Action::PathDetailsRangeSelected { .. } => "PathDetailsRangeSelected",
            Action::PathDetailsElevationSelected { .. } => "PathDetailsElevationSelected",
        }
    }
}
