use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use routing_map_sync::{
    Coordinate, Dispatcher, HeadlessMap, LineString, MapAdapter, MapCallbacks, MapEvent,
    MapOptions, Path, QueryPoint,
};
use std::hint::black_box;
use std::rc::Rc;

fn loaded_adapter() -> MapAdapter<HeadlessMap> {
    let mut adapter = MapAdapter::new(
        HeadlessMap::new(),
        Rc::new(Dispatcher::new()),
        MapOptions::default(),
        MapCallbacks::default(),
    );
    adapter
        .handle_event(MapEvent::Loaded)
        .expect("Laden fehlgeschlagen");
    adapter
}

fn build_query_points(count: usize) -> Vec<QueryPoint> {
    (0..count)
        .map(|i| {
            let lat = 47.0 + (i % 100) as f64 * 0.05;
            let lng = 6.0 + ((i * 7) % 100) as f64 * 0.09;
            if i % 5 == 4 {
                QueryPoint::placeholder(i as u32, "#76D0F7")
            } else {
                QueryPoint::at(i as u32, Coordinate::new(lat, lng), "#76D0F7")
            }
        })
        .collect()
}

fn build_path(point_count: usize) -> Path {
    let coordinates = (0..point_count)
        .map(|i| {
            let t = i as f64 / point_count as f64;
            [13.4 - t * 1.8, 52.5 - t * 4.4]
        })
        .collect();
    Path::from_points(LineString::new(coordinates))
}

fn bench_draw_markers(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_markers");

    for &count in &[2usize, 10, 100] {
        let points = build_query_points(count);
        let mut adapter = loaded_adapter();

        group.bench_with_input(BenchmarkId::new("replace_all", count), &points, |b, pts| {
            b.iter(|| {
                adapter.draw_markers(black_box(pts));
                black_box(adapter.marker_count())
            })
        });
    }

    group.finish();
}

fn bench_draw_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");

    for &point_count in &[100usize, 10_000] {
        let path = build_path(point_count);
        let mut adapter = loaded_adapter();

        group.bench_with_input(BenchmarkId::new("set_source", point_count), &path, |b, p| {
            b.iter(|| {
                adapter
                    .draw_line(black_box(p))
                    .expect("draw_line fehlgeschlagen");
            })
        });
    }

    group.finish();
}

criterion_group!(reconcile_benches, bench_draw_markers, bench_draw_line);
criterion_main!(reconcile_benches);
