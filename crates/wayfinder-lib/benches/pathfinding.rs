use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;
use wayfinder_lib::{
    find_path_a_star, load_building, plan_route, ConnectorKind, Map, RouteRequest,
};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/science_hall.json")
}

static MAP: Lazy<Map> = Lazy::new(|| load_building(&fixture_path()).expect("fixture loads"));
static SAME_FLOOR: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new(1, 5));
static CROSS_FLOOR: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new(1, 22));
static STAIRS_ONLY: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new(1, 23).prefer(ConnectorKind::Staircase));

fn benchmark_pathfinding(c: &mut Criterion) {
    let map = &*MAP;

    c.bench_function("astar_entrance_lab102", |b| {
        b.iter(|| {
            let path = find_path_a_star(map, 1, 5)
                .expect("endpoints exist")
                .expect("route exists");
            black_box(path.cost())
        });
    });

    c.bench_function("route_same_floor", |b| {
        let request = &*SAME_FLOOR;
        b.iter(|| {
            let path = plan_route(map, request).expect("route exists");
            black_box(path.hop_count())
        });
    });

    c.bench_function("route_cross_floor", |b| {
        let request = &*CROSS_FLOOR;
        b.iter(|| {
            let path = plan_route(map, request).expect("route exists");
            black_box(path.hop_count())
        });
    });

    c.bench_function("route_cross_floor_stairs", |b| {
        let request = &*STAIRS_ONLY;
        b.iter(|| {
            let path = plan_route(map, request).expect("route exists");
            black_box(path.cost())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
