use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gridpath_core::{GridMap, Point};
use gridpath_search::{GridSearch, Metric, SearchOptions, SearchType};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// 128x128 map with scattered obstacles and a clear diagonal band, so every
/// mode finds a path.
fn scattered_map() -> GridMap {
    let mut rng = StdRng::seed_from_u64(7);
    let mut map = GridMap::new(128, 128);
    for p in map.bounds() {
        if (p.x - p.y).abs() > 2 && rng.random_range(0..100u32) < 25 {
            map.set_obstacle(p);
        }
    }
    map.set_goal(Point::new(127, 127));
    map
}

fn benchmark_search(c: &mut Criterion) {
    let map = scattered_map();
    let modes = [
        ("dijkstra_scattered", SearchOptions::new(SearchType::Dijkstra)),
        ("astar_scattered", SearchOptions::new(SearchType::AStar)),
        (
            "weighted_astar_scattered",
            SearchOptions::new(SearchType::AStar).with_hweight(2.0),
        ),
        (
            "theta_scattered",
            SearchOptions::new(SearchType::Theta).with_metric(Metric::Euclidean),
        ),
    ];

    for (name, options) in modes {
        let engine = GridSearch::new(options).expect("valid options");
        c.bench_function(name, |b| {
            b.iter(|| {
                let result = engine.find_path(&map).expect("endpoints on grid");
                black_box((result.cost, result.waypoints.len()))
            });
        });
    }
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
