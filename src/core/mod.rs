//! Core-Domänentypen: Koordinaten, Wegpunkte, Pfade, Backend-Antworten.

pub mod api;
pub mod coordinate;
/// GeoJSON-Strukturen für Routen-Geometrie und Karten-Quellen
pub mod geojson;
pub mod map_style;
pub mod path;
pub mod path_details;
pub mod query_point;
pub mod viewport;

pub use api::{ApiInfo, RoutingArgs, RoutingProfile, RoutingResult, RoutingResultInfo};
pub use coordinate::{Bbox, Coordinate};
pub use geojson::{Feature, FeatureCollection, Geometry, LineString};
pub use map_style::StyleOption;
pub use path::Path;
pub use path_details::PathDetailsPoint;
pub use query_point::QueryPoint;
pub use viewport::ViewportStoreState;
