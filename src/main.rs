//! Routing Map Sync.
//!
//! Demo-Lauf ohne Darstellung: verdrahtet Dispatcher, Stores und Karten-Komponente
//! auf einem In-Memory-Widget und spielt eine typische Sitzung durch.

use routing_map_sync::app::{ErrorStoreState, MapOptionsStoreState, PathDetailsState};
use routing_map_sync::{
    Action, Bbox, Coordinate, Dispatcher, ErrorStore, HeadlessMap, LineString, MapEvent,
    MapOptions, MapOptionsStore, MapStores, MapView, Path, PathDetailsStore,
    PopupAction, QueryStore, RouteStore, RoutingArgs, RoutingResult, StoreHandle, ViewportStore,
};
use std::rc::Rc;

/// Breite des simulierten Host-Fensters
const DEMO_VIEWPORT_WIDTH: f32 = 1280.0;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Routing Map Sync v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapOptions::config_path();
        let options = MapOptions::load_from_file(&config_path);

        let session = DemoSession::new(options);
        session.run()
    }
}

/// Alle Stores einer Sitzung
struct DemoSession {
    dispatcher: Rc<Dispatcher>,
    stores: MapStores,
    errors: Rc<StoreHandle<ErrorStore>>,
    map_options: Rc<StoreHandle<MapOptionsStore>>,
    path_details: Rc<StoreHandle<PathDetailsStore>>,
    options: MapOptions,
}

impl DemoSession {
    fn new(options: MapOptions) -> Self {
        let dispatcher = Rc::new(Dispatcher::new());
        let stores = MapStores {
            query: StoreHandle::register(
                QueryStore::new(options.query_point_colors.clone()),
                &dispatcher,
            ),
            route: StoreHandle::register(RouteStore, &dispatcher),
            viewport: StoreHandle::register(ViewportStore, &dispatcher),
        };
        let errors = StoreHandle::register(ErrorStore, &dispatcher);
        let map_options = StoreHandle::register(MapOptionsStore::new(&options), &dispatcher);
        let path_details = StoreHandle::register(PathDetailsStore, &dispatcher);

        Self {
            dispatcher,
            stores,
            errors,
            map_options,
            path_details,
            options,
        }
    }

    fn run(self) -> anyhow::Result<()> {
        let mut view = MapView::mount(
            HeadlessMap::new(),
            Rc::clone(&self.dispatcher),
            self.stores.clone(),
            self.options.clone(),
            DEMO_VIEWPORT_WIDTH,
        );

        // Vor dem Laden: nichts wird gezeichnet
        view.render()?;
        view.handle_event(MapEvent::Loaded)?;
        view.render()?;
        self.log_state("Karte geladen");

        let start = Coordinate::new(52.5200, 13.4050);
        let end = Coordinate::new(52.3906, 13.0645);

        view.handle_event(MapEvent::ContextMenu { coordinate: start })?;
        view.handle_popup_action(PopupAction::SetAsStart);
        view.handle_event(MapEvent::ContextMenu { coordinate: end })?;
        view.handle_popup_action(PopupAction::SetAsEnd);
        view.render()?;
        self.log_state("Start und Ziel gesetzt");

        let request = self.routing_args();
        self.dispatcher.dispatch(Action::RouteRequestSuccess {
            request: request.clone(),
            result: Self::sample_result(start, end),
        });
        view.render()?;
        self.log_state("Route empfangen");
        log::info!(
            "Karte: {} Marker, {} Kamerafahrten",
            view.adapter().marker_count(),
            view.adapter().widget().camera_fits().len()
        );

        // Ziel per Drag verschieben
        let moved = Coordinate::new(52.4000, 13.0500);
        if let Some(marker) = view.adapter().widget().attached_marker_ids().last().copied() {
            view.handle_event(MapEvent::MarkerDragEnd {
                marker,
                coordinate: moved,
            })?;
        }
        view.render()?;
        self.log_state("Ziel verschoben");

        self.dispatcher.dispatch(Action::RouteRequestFailed {
            request,
            error_message: "Keine Verbindung zum Routing-Server".to_string(),
        });
        self.log_state("Anfrage fehlgeschlagen");
        self.dispatcher.dispatch(Action::DismissLastError);
        self.log_state("Fehler quittiert");

        let map = view.unmount();
        log::info!(
            "Karte abgebaut: entfernt={}, {} Widget-Aufrufe",
            map.is_removed(),
            map.mutation_count()
        );
        Self::log_leftovers(&map);
        Ok(())
    }

    fn routing_args(&self) -> RoutingArgs {
        let query = self.stores.query.state();
        RoutingArgs {
            points: query
                .initialized_coordinates()
                .into_iter()
                .map(Coordinate::to_lng_lat)
                .collect(),
            profile: query.routing_profile.name.clone(),
            max_alternative_routes: 3,
        }
    }

    fn sample_result(start: Coordinate, end: Coordinate) -> RoutingResult {
        let coordinates = vec![
            start.to_lng_lat(),
            [13.2500, 52.4700],
            [13.1500, 52.4200],
            end.to_lng_lat(),
        ];
        let bbox = Bbox::around(coordinates.iter().map(|c| Coordinate::from_lng_lat(*c)));

        let mut path = Path::from_points(LineString::new(coordinates));
        path.distance = 31_400.0;
        path.time = 1_980_000;
        path.bbox = bbox;

        RoutingResult {
            paths: vec![path],
            ..Default::default()
        }
    }

    fn log_state(&self, step: &str) {
        let query = self.stores.query.state();
        let route = self.stores.route.state();
        let errors = self.errors.state();
        let map_options = self.map_options.state();
        let path_details = self.path_details.state();
        let ErrorStoreState { last_error } = errors.as_ref();
        let MapOptionsStoreState { is_map_loaded, .. } = map_options.as_ref();
        let PathDetailsState { hover_point, .. } = path_details.as_ref();

        log::info!(
            "[{}] Wegpunkte: {}/{} gesetzt, Pfad: {} Punkte, Fehler: {:?}, Karte geladen: {}, Hover: {}",
            step,
            query.initialized_coordinates().len(),
            query.query_points.len(),
            route.selected_path.point_count(),
            last_error,
            is_map_loaded,
            hover_point.is_some(),
        );
        log::debug!("[{}] Kamera-Ziel: {:?}", step, self.stores.viewport.state().bbox().0);
    }

    fn log_leftovers(map: &HeadlessMap) {
        if !map.attached_marker_ids().is_empty() || map.popup().is_some() {
            log::warn!("Nach dem Abbau sind noch Marker oder ein Popup vorhanden");
        }
    }
}
