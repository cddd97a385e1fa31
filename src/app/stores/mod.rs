//! Stores: leiten aus Action + vorherigem Snapshot einen neuen, unveränderlichen Snapshot ab.
//!
//! Struktur:
//! - `mod.rs`: `Store`-Vertrag + `StoreHandle` (Registrierung, Snapshot, Subscriber)
//! - `query.rs`: Wegpunkte und Routing-Profil
//! - `route.rs`: Routing-Ergebnis und gewählter Pfad
//! - `error.rs`: zuletzt aufgetretener Fehler
//! - `map_options.rs`: Kartenstil und Ladezustand
//! - `viewport.rs`: Kamera-Ziel (Viewport oder Bbox)
//! - `path_details.rs`: Höhenprofil-Interaktion

mod error;
mod map_options;
mod path_details;
mod query;
mod route;
mod viewport;

pub use error::{ErrorStore, ErrorStoreState};
pub use map_options::{MapOptionsStore, MapOptionsStoreState};
pub use path_details::{PathDetailsState, PathDetailsStore};
pub use query::{QueryStore, QueryStoreState};
pub use route::{RouteStore, RouteStoreState};
pub use viewport::{CameraTarget, ViewportState, ViewportStore};

use super::{Action, DispatchToken, Dispatcher};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Vertrag eines Stores: reine Ableitung des nächsten Zustands.
pub trait Store: 'static {
    type State: 'static;

    /// Name für Logging
    fn name(&self) -> &'static str;

    /// Zustand vor der ersten Action
    fn initial_state(&self) -> Self::State;

    /// Leitet den Folgezustand ab. `None` = Action betrifft diesen Store nicht.
    fn reduce(&self, state: &Self::State, action: &Action) -> Option<Self::State>;
}

/// Kennung eines Subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&Rc<T>)>;

/// Beim Dispatcher registrierter Store mit aktuellem Snapshot.
pub struct StoreHandle<S: Store> {
    store: S,
    state: RefCell<Rc<S::State>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<S::State>)>>,
    next_subscription: Cell<u64>,
    token: Cell<Option<DispatchToken>>,
}

impl<S: Store> StoreHandle<S> {
    /// Erstellt den Store mit Initialzustand und registriert ihn beim Dispatcher.
    pub fn register(store: S, dispatcher: &Dispatcher) -> Rc<Self> {
        let handle = Rc::new(Self {
            state: RefCell::new(Rc::new(store.initial_state())),
            store,
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            token: Cell::new(None),
        });

        let weak = Rc::downgrade(&handle);
        let token = dispatcher.register(move |action| {
            if let Some(handle) = weak.upgrade() {
                handle.receive(action);
            }
        });
        handle.token.set(Some(token));
        log::debug!("Store '{}' registriert", handle.store.name());
        handle
    }

    /// Aktueller Snapshot (O(1)-Klon)
    pub fn state(&self) -> Rc<S::State> {
        Rc::clone(&self.state.borrow())
    }

    /// Meldet einen Subscriber an, der nach jeder Zustandsänderung den neuen Snapshot erhält.
    pub fn subscribe(&self, subscriber: impl Fn(&Rc<S::State>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(subscriber)));
        id
    }

    /// Meldet einen Subscriber ab.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(s, _)| *s != id);
        subscribers.len() != before
    }

    /// Löst den Store vom Dispatcher. Der letzte Snapshot bleibt lesbar.
    pub fn detach(&self, dispatcher: &Dispatcher) {
        if let Some(token) = self.token.take() {
            dispatcher.unregister(token);
            log::debug!("Store '{}' abgemeldet", self.store.name());
        }
    }

    fn receive(&self, action: &Action) {
        let next = {
            let current = self.state.borrow();
            self.store.reduce(&current, action)
        };
        let Some(next) = next else {
            return;
        };

        let next = Rc::new(next);
        *self.state.borrow_mut() = Rc::clone(&next);
        log::trace!(
            "Store '{}' aktualisiert durch {}",
            self.store.name(),
            action.name()
        );

        let subscribers: Vec<Subscriber<S::State>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        for subscriber in subscribers {
            subscriber(&next);
        }
    }
}
