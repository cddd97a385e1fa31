//! Routing Map Sync Library.
//! Action-Katalog, Dispatcher, Stores und Karten-Abgleich als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod shared;

pub use app::{
    Action, CameraTarget, DispatchError, DispatchToken, Dispatcher, ErrorStore, MapOptionsStore,
    PathDetailsStore, QueryStore, RouteStore, Store, StoreHandle, SubscriptionId, ViewportStore,
};
pub use core::{
    ApiInfo, Bbox, Coordinate, FeatureCollection, LineString, Path, QueryPoint, RoutingArgs,
    RoutingProfile, RoutingResult,
};
pub use map::{
    AdapterPhase, HeadlessMap, MapAdapter, MapCallbacks, MapEvent, MapStores, MapView, MapWidget,
    MarkerId, PopupAction,
};
pub use shared::MapOptions;
