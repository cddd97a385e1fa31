//! Application-Layer: Action-Katalog, Dispatcher und Stores.

pub mod dispatcher;
pub mod events;
/// Stores leiten aus Actions unveränderliche Snapshots ab.
pub mod stores;

pub use dispatcher::{DispatchError, DispatchToken, Dispatcher, Listener};
pub use events::Action;
pub use stores::{
    CameraTarget, ErrorStore, ErrorStoreState, MapOptionsStore, MapOptionsStoreState,
    PathDetailsState, PathDetailsStore, QueryStore, QueryStoreState, RouteStore, RouteStoreState,
    Store, StoreHandle, SubscriptionId, ViewportState, ViewportStore,
};
