use approx::assert_relative_eq;
use routing_map_sync::map::{HeadlessMap, PopupContent};
use routing_map_sync::shared::options::{
    Padding, ROUTE_LAYER_KEY, ROUTE_LINE_WIDTH, ROUTE_SOURCE_KEY,
};
use routing_map_sync::{
    Action, AdapterPhase, Bbox, Coordinate, Dispatcher, LineString, MapAdapter, MapCallbacks,
    MapEvent, MapOptions, Path, QueryPoint,
};
use std::cell::RefCell;
use std::rc::Rc;

fn new_adapter() -> (MapAdapter<HeadlessMap>, Rc<RefCell<Vec<Action>>>) {
    let dispatcher = Rc::new(Dispatcher::new());
    let dispatched = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&dispatched);
    dispatcher.register(move |action| log.borrow_mut().push(action.clone()));

    let adapter = MapAdapter::new(
        HeadlessMap::new(),
        dispatcher,
        MapOptions::default(),
        MapCallbacks::default(),
    );
    (adapter, dispatched)
}

fn loaded_adapter() -> (MapAdapter<HeadlessMap>, Rc<RefCell<Vec<Action>>>) {
    let (mut adapter, dispatched) = new_adapter();
    adapter
        .handle_event(MapEvent::Loaded)
        .expect("Laden sollte ohne Fehler durchlaufen");
    (adapter, dispatched)
}

fn route_points() -> Vec<QueryPoint> {
    vec![
        QueryPoint::at(0, Coordinate::new(52.5, 13.4), "green"),
        QueryPoint::at(1, Coordinate::new(48.1, 11.6), "red"),
    ]
}

#[test]
fn test_calls_before_load_do_not_touch_widget() {
    let (mut adapter, _) = new_adapter();

    adapter
        .draw_line(&Path::from_points(LineString::new(vec![[1.0, 2.0], [3.0, 4.0]])))
        .expect("draw_line vor dem Laden sollte kein Fehler sein");
    adapter.draw_markers(&route_points());
    adapter.draw_popup(
        Coordinate::new(1.0, 1.0),
        &PopupContent::for_coordinate(Coordinate::new(1.0, 1.0), &route_points()),
    );
    adapter.fit_bounds(Bbox::new(1.0, 1.0, 2.0, 2.0), 1280.0);

    assert_eq!(adapter.phase(), AdapterPhase::NotReady);
    assert_eq!(adapter.widget().mutation_count(), 0);
    assert_eq!(adapter.marker_count(), 0);
}

#[test]
fn test_load_creates_route_layer_with_configured_style() {
    let (adapter, _) = loaded_adapter();
    let map = adapter.widget();

    assert_eq!(map.layer_count(), 1);
    let style = map.layer(ROUTE_LAYER_KEY).expect("Routen-Layer fehlt");
    assert_relative_eq!(style.line_width, ROUTE_LINE_WIDTH);
    assert!(style.round_join && style.round_cap);
    assert!(map
        .source(ROUTE_SOURCE_KEY)
        .expect("Routen-Quelle fehlt")
        .features
        .is_empty());
}

#[test]
fn test_draw_markers_is_idempotent() {
    let (mut adapter, _) = loaded_adapter();
    let points = route_points();

    adapter.draw_markers(&points);
    let first: Vec<_> = adapter
        .widget()
        .attached_markers()
        .into_iter()
        .cloned()
        .collect();
    adapter.draw_markers(&points);
    let second: Vec<_> = adapter
        .widget()
        .attached_markers()
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(adapter.marker_count(), 2);
}

#[test]
fn test_only_initialized_points_get_markers() {
    let (mut adapter, _) = loaded_adapter();

    adapter.draw_markers(&[
        QueryPoint::placeholder(0, "green"),
        QueryPoint::at(1, Coordinate::new(1.0, 2.0), "red"),
    ]);

    let markers = adapter.widget().attached_markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].coordinate, Coordinate::new(1.0, 2.0));
    assert_eq!(markers[0].color, "red");
    assert!(markers[0].draggable);
}

#[test]
fn test_draw_line_empty_and_single_feature() {
    let (mut adapter, _) = loaded_adapter();

    adapter
        .draw_line(&Path::from_points(LineString::new(vec![
            [13.4, 52.5],
            [11.6, 48.1],
        ])))
        .unwrap();
    let source = adapter.widget().source(ROUTE_SOURCE_KEY).unwrap();
    assert_eq!(source.features.len(), 1);

    adapter.draw_line(&Path::default()).unwrap();
    let source = adapter.widget().source(ROUTE_SOURCE_KEY).unwrap();
    assert!(source.features.is_empty());
    // Layer wird nie neu angelegt
    assert_eq!(adapter.widget().layer_count(), 1);
}

#[test]
fn test_fit_bounds_ignores_unset_bbox() {
    let (mut adapter, _) = loaded_adapter();

    adapter.fit_bounds(Bbox::UNSET, 1280.0);
    assert!(adapter.widget().camera_fits().is_empty());

    let bbox = Bbox::new(11.6, 48.1, 13.4, 52.5);
    adapter.fit_bounds(bbox, 1280.0);
    adapter.fit_bounds(bbox, 400.0);

    assert_eq!(
        adapter.widget().camera_fits(),
        &[(bbox, Padding::WIDE), (bbox, Padding::NARROW)]
    );
}

#[test]
fn test_bbox_with_zero_component_keeps_camera() {
    let (mut adapter, _) = loaded_adapter();

    adapter.fit_bounds(Bbox::new(0.0, 48.0, 10.0, 52.0), 1280.0);
    adapter.fit_bounds(Bbox::new(5.0, 48.0, 10.0, 0.0), 400.0);

    assert!(
        adapter.widget().camera_fits().is_empty(),
        "Bbox mit Null-Komponente sollte die Kamera nicht bewegen"
    );
}

#[test]
fn test_drag_end_reports_point_of_current_markers() {
    let (mut adapter, dispatched) = loaded_adapter();
    adapter.draw_markers(&route_points());

    // Neu zeichnen mit vertauschter Reihenfolge: alte Marker-IDs verfallen
    let mut swapped = route_points();
    swapped.reverse();
    adapter.draw_markers(&swapped);

    let ids = adapter.widget().attached_marker_ids();
    let target = Coordinate::new(50.0, 10.0);
    adapter
        .handle_event(MapEvent::MarkerDragEnd {
            marker: ids[0],
            coordinate: target,
        })
        .unwrap();

    let dispatched = dispatched.borrow();
    assert_eq!(dispatched.len(), 1);
    match &dispatched[0] {
        Action::SetPoint { point } => {
            assert_eq!(point.id, 1, "erster Marker gehört jetzt zu Wegpunkt 1");
            assert_eq!(point.coordinate, Some(target));
            assert_eq!(point.color, "red");
        }
        other => panic!("Unerwartete Action: {other:?}"),
    }
}

#[test]
fn test_remove_leaves_nothing_behind() {
    let (mut adapter, _) = loaded_adapter();
    adapter.draw_markers(&route_points());
    adapter.draw_popup(
        Coordinate::new(1.0, 1.0),
        &PopupContent::for_coordinate(Coordinate::new(1.0, 1.0), &route_points()),
    );
    assert!(adapter.widget().popup().is_some());

    adapter.remove();
    adapter.remove();

    assert_eq!(adapter.phase(), AdapterPhase::Removed);
    let map = adapter.into_widget();
    assert!(map.attached_marker_ids().is_empty());
    assert!(map.popup().is_none());
    assert_eq!(map.remove_count(), 1);
}

#[test]
fn test_calls_after_remove_are_ignored() {
    let (mut adapter, dispatched) = loaded_adapter();
    adapter.draw_markers(&route_points());
    let id = adapter.widget().attached_marker_ids()[0];
    adapter.remove();
    let mutations = adapter.widget().mutation_count();

    adapter.draw_markers(&route_points());
    adapter.fit_bounds(Bbox::new(1.0, 1.0, 2.0, 2.0), 1280.0);
    adapter
        .handle_event(MapEvent::MarkerDragEnd {
            marker: id,
            coordinate: Coordinate::new(0.5, 0.5),
        })
        .unwrap();
    adapter.handle_event(MapEvent::Loaded).unwrap();

    assert_eq!(adapter.widget().mutation_count(), mutations);
    assert!(dispatched.borrow().is_empty());
    assert_eq!(adapter.phase(), AdapterPhase::Removed);
}
