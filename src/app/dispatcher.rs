//! Zentraler Dispatcher: verteilt jede Action synchron an alle registrierten Listener.

use super::Action;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Listener-Callback. Stores registrieren sich hierüber.
pub type Listener = Rc<dyn Fn(&Action)>;

/// Kennung einer Registrierung, für `unregister`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DispatchToken(u64);

/// Fehler beim Dispatchen
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Dispatch wurde aus einem laufenden Dispatch heraus aufgerufen
    #[error("Verschachtelter Dispatch von '{action}' während eines laufenden Dispatch")]
    Reentrant { action: &'static str },
}

/// Einziger Verteilpunkt für Actions.
///
/// Wird einmal beim Start erzeugt und als `Rc<Dispatcher>` an Stores und
/// UI-Komponenten weitergereicht. Single-threaded.
#[derive(Default)]
pub struct Dispatcher {
    listeners: RefCell<Vec<(DispatchToken, Listener)>>,
    next_token: Cell<u64>,
    dispatching: Cell<bool>,
}

/// Setzt das Dispatch-Flag beim Verlassen zurück, auch bei Panic im Listener.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Dispatcher {
    /// Erstellt einen Dispatcher ohne Listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener. Reihenfolge der Registrierung = Aufrufreihenfolge.
    pub fn register(&self, listener: impl Fn(&Action) + 'static) -> DispatchToken {
        let token = DispatchToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.listeners.borrow_mut().push((token, Rc::new(listener)));
        log::debug!("Listener {:?} registriert", token);
        token
    }

    /// Entfernt einen Listener. Gibt `false` zurück, wenn das Token unbekannt ist.
    pub fn unregister(&self, token: DispatchToken) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(t, _)| *t != token);
        let removed = listeners.len() != before;
        if !removed {
            log::warn!("Unbekanntes Listener-Token {:?}", token);
        }
        removed
    }

    /// Anzahl registrierter Listener
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// `true`, solange ein Dispatch läuft
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.get()
    }

    /// Verteilt eine Action an alle Listener.
    ///
    /// Gibt `DispatchError::Reentrant` zurück, wenn bereits ein Dispatch läuft;
    /// in diesem Fall wird kein Listener aufgerufen.
    pub fn try_dispatch(&self, action: Action) -> Result<(), DispatchError> {
        if self.dispatching.get() {
            return Err(DispatchError::Reentrant {
                action: action.name(),
            });
        }

        self.dispatching.set(true);
        let _guard = DispatchGuard(&self.dispatching);

        // Snapshot: (Ab-)Meldungen aus einem Listener wirken erst beim nächsten Dispatch
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        log::trace!(
            "Dispatch {} an {} Listener",
            action.name(),
            listeners.len()
        );
        for listener in &listeners {
            listener(&action);
        }
        Ok(())
    }

    /// Verteilt eine Action an alle Listener.
    ///
    /// # Panics
    /// Bei verschachteltem Aufruf aus einem Listener heraus. Das ist ein
    /// Programmierfehler und bricht den laufenden Dispatch ab.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.try_dispatch(action) {
            log::error!("{}", e);
            panic!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn recording(log: &Rc<RefCell<Vec<String>>>, name: &str) -> impl Fn(&Action) + 'static {
        let log = Rc::clone(log);
        let name = name.to_string();
        move |action: &Action| log.borrow_mut().push(format!("{}:{}", name, action.name()))
    }

    #[test]
    fn test_dispatch_calls_listeners_in_registration_order() {
        let dispatcher = Dispatcher::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        dispatcher.register(recording(&log, "a"));
        dispatcher.register(recording(&log, "b"));
        dispatcher.register(recording(&log, "c"));

        dispatcher.dispatch(Action::ClearRoute);

        assert_eq!(
            *log.borrow(),
            vec!["a:ClearRoute", "b:ClearRoute", "c:ClearRoute"]
        );
    }

    #[test]
    fn test_unregistered_listener_is_not_called() {
        let dispatcher = Dispatcher::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = dispatcher.register(recording(&log, "a"));
        dispatcher.register(recording(&log, "b"));

        assert!(dispatcher.unregister(a));
        assert!(!dispatcher.unregister(a));
        dispatcher.dispatch(Action::MapIsLoaded);

        assert_eq!(*log.borrow(), vec!["b:MapIsLoaded"]);
    }

    #[test]
    fn test_reentrant_try_dispatch_is_rejected() {
        let dispatcher = Rc::new(Dispatcher::new());
        let result = Rc::new(RefCell::new(None));

        let inner = Rc::clone(&dispatcher);
        let seen = Rc::clone(&result);
        dispatcher.register(move |_| {
            *seen.borrow_mut() = Some(inner.try_dispatch(Action::DismissLastError));
        });

        dispatcher.dispatch(Action::ClearPoints);

        let outcome = result.borrow_mut().take().expect("Listener sollte laufen");
        assert!(matches!(
            outcome,
            Err(DispatchError::Reentrant {
                action: "DismissLastError"
            })
        ));
        assert!(!dispatcher.is_dispatching());
    }

    #[test]
    fn test_reentrant_dispatch_panics_before_later_listeners() {
        let dispatcher = Rc::new(Dispatcher::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner = Rc::clone(&dispatcher);
        dispatcher.register(move |_| inner.dispatch(Action::ClearRoute));
        dispatcher.register(recording(&log, "later"));

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            dispatcher.dispatch(Action::ClearPoints)
        }));

        assert!(outcome.is_err());
        assert!(log.borrow().is_empty());
        // Flag wird beim Abwickeln zurückgesetzt
        assert!(!dispatcher.is_dispatching());
        dispatcher.unregister(DispatchToken(0));
        dispatcher.dispatch(Action::ClearPoints);
        assert_eq!(*log.borrow(), vec!["later:ClearPoints"]);
    }

    #[test]
    fn test_register_during_dispatch_takes_effect_next_time() {
        let dispatcher = Rc::new(Dispatcher::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner = Rc::clone(&dispatcher);
        let late_log = Rc::clone(&log);
        let registered = Cell::new(false);
        dispatcher.register(move |_| {
            if !registered.replace(true) {
                inner.register(recording(&late_log, "late"));
            }
        });

        dispatcher.dispatch(Action::ClearRoute);
        assert!(log.borrow().is_empty());

        dispatcher.dispatch(Action::ClearPoints);
        assert_eq!(*log.borrow(), vec!["late:ClearPoints"]);
    }

    #[test]
    fn test_unregister_during_dispatch_does_not_skip_current_delivery() {
        let dispatcher = Rc::new(Dispatcher::new());
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner = Rc::clone(&dispatcher);
        // Token des zweiten Listeners ist 1
        dispatcher.register(move |_| {
            inner.unregister(DispatchToken(1));
        });
        dispatcher.register(recording(&log, "second"));

        dispatcher.dispatch(Action::ClearRoute);
        dispatcher.dispatch(Action::ClearPoints);

        assert_eq!(*log.borrow(), vec!["second:ClearRoute"]);
        assert_eq!(dispatcher.listener_count(), 1);
    }
}
