//! Karten-Komponente: bindet Query-, Route- und Viewport-Store an den Adapter.

use super::scene::MapScene;
use super::{MapAdapter, MapCallbacks, MapEvent, MapWidget, PopupAction, PopupContent};
use crate::app::{
    Action, Dispatcher, QueryStore, RouteStore, StoreHandle, SubscriptionId, ViewportStore,
};
use crate::core::Coordinate;
use crate::shared::MapOptions;
use std::cell::Cell;
use std::rc::Rc;

/// Stores, aus denen die Karte ihren Zustand bezieht
#[derive(Clone)]
pub struct MapStores {
    pub query: Rc<StoreHandle<QueryStore>>,
    pub route: Rc<StoreHandle<RouteStore>>,
    pub viewport: Rc<StoreHandle<ViewportStore>>,
}

/// Signale aus Callbacks und Subscribern, ausgewertet außerhalb des Adapter-Borrows
#[derive(Default)]
struct ViewSignals {
    ready: Cell<bool>,
    popup_request: Cell<Option<Coordinate>>,
    dirty: Cell<bool>,
}

/// Besitzt den Adapter für die Dauer eines Mounts.
pub struct MapView<W: MapWidget> {
    adapter: MapAdapter<W>,
    dispatcher: Rc<Dispatcher>,
    stores: MapStores,
    subscriptions: [SubscriptionId; 3],
    signals: Rc<ViewSignals>,
    rendered: Option<MapScene>,
    open_popup: Option<(Coordinate, PopupContent)>,
    viewport_width: f32,
}

impl<W: MapWidget> MapView<W> {
    /// Mountet die Karte auf `widget`. Gezeichnet wird erst nach `MapEvent::Loaded`.
    pub fn mount(
        widget: W,
        dispatcher: Rc<Dispatcher>,
        stores: MapStores,
        options: MapOptions,
        viewport_width: f32,
    ) -> Self {
        let signals = Rc::new(ViewSignals::default());

        let ready = Rc::clone(&signals);
        let popup = Rc::clone(&signals);
        let callbacks = MapCallbacks {
            on_ready: Box::new(move || ready.ready.set(true)),
            on_click: Box::new(|coordinate: Coordinate| log::info!("onclick: {}", coordinate)),
            on_context_menu: Box::new(move |coordinate: Coordinate| {
                popup.popup_request.set(Some(coordinate))
            }),
        };
        let adapter = MapAdapter::new(widget, Rc::clone(&dispatcher), options, callbacks);

        let subscriptions = [
            Self::mark_dirty_on_change(&stores.query, &signals),
            Self::mark_dirty_on_change(&stores.route, &signals),
            Self::mark_dirty_on_change(&stores.viewport, &signals),
        ];

        Self {
            adapter,
            dispatcher,
            stores,
            subscriptions,
            signals,
            rendered: None,
            open_popup: None,
            viewport_width,
        }
    }

    fn mark_dirty_on_change<S: crate::app::Store>(
        store: &StoreHandle<S>,
        signals: &Rc<ViewSignals>,
    ) -> SubscriptionId {
        let signals = Rc::clone(signals);
        store.subscribe(move |_| signals.dirty.set(true))
    }

    pub fn adapter(&self) -> &MapAdapter<W> {
        &self.adapter
    }

    /// `true`, wenn seit dem letzten `render()` ein relevanter Store geändert wurde
    pub fn needs_render(&self) -> bool {
        self.signals.dirty.get()
    }

    /// Aktuelle Viewport-Breite des Hosts (für das Padding beim Einpassen)
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Aktuell geöffnetes Popup
    pub fn popup(&self) -> Option<&(Coordinate, PopupContent)> {
        self.open_popup.as_ref()
    }

    /// Leitet ein Widget-Ereignis an den Adapter weiter und wertet die Callbacks aus.
    pub fn handle_event(&mut self, event: MapEvent) -> anyhow::Result<()> {
        self.adapter.handle_event(event)?;

        if self.signals.ready.take() {
            // Vor dem Laden verworfene Aufrufe werden beim nächsten render() nachgeholt
            self.rendered = None;
            self.signals.dirty.set(true);
            self.dispatcher.dispatch(Action::MapIsLoaded);
        }
        if let Some(coordinate) = self.signals.popup_request.take() {
            // Vor dem Laden zeigt das Widget kein Popup an
            if self.adapter.is_ready() {
                let content = PopupContent::for_coordinate(
                    coordinate,
                    &self.stores.query.state().query_points,
                );
                self.adapter.draw_popup(coordinate, &content);
                self.open_popup = Some((coordinate, content));
            }
        }
        Ok(())
    }

    /// Gleicht das Widget mit den aktuellen Store-Snapshots ab.
    ///
    /// Ruft die Zeichenoperationen für jede geänderte Slice auf; nach dem
    /// Laden einmal für alle.
    pub fn render(&mut self) -> anyhow::Result<()> {
        if !self.adapter.is_ready() {
            return Ok(());
        }
        self.signals.dirty.set(false);

        let scene = MapScene {
            route: self.stores.route.state(),
            query: self.stores.query.state(),
            viewport: self.stores.viewport.state(),
        };
        let changes = scene.changes_since(self.rendered.as_ref());

        if changes.path {
            self.adapter.draw_line(scene.path())?;
        }
        if changes.markers {
            self.adapter.draw_markers(scene.query_points());
        }
        if changes.bounds {
            self.adapter.fit_bounds(scene.bbox(), self.viewport_width);
        }

        self.rendered = Some(scene);
        Ok(())
    }

    /// Führt eine Auswahl im offenen Popup aus und schließt es.
    ///
    /// Gibt `false` zurück, wenn kein Popup offen ist oder die Auswahl nichts bewirkt.
    pub fn handle_popup_action(&mut self, choice: PopupAction) -> bool {
        let Some((coordinate, content)) = self.open_popup.take() else {
            log::warn!("Popup-Auswahl ohne offenes Popup");
            return false;
        };
        self.adapter.close_popup();

        if !content.actions.contains(&choice) {
            log::warn!("'{}' wird in diesem Popup nicht angeboten", choice.label());
            return false;
        }
        let Some(action) = choice.to_action(coordinate, &self.stores.query.state().query_points)
        else {
            return false;
        };
        self.dispatcher.dispatch(action);
        true
    }

    /// Baut die Karte ab. Einziger Aufräumpfad; gibt das Widget zurück.
    pub fn unmount(mut self) -> W {
        self.stores.query.unsubscribe(self.subscriptions[0]);
        self.stores.route.unsubscribe(self.subscriptions[1]);
        self.stores.viewport.unsubscribe(self.subscriptions[2]);
        self.adapter.remove();
        self.adapter.into_widget()
    }
}
