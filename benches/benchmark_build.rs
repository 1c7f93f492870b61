use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use quadtree_index::{Coordinate, QuadTree, Rectangle};

pub fn construction_benchmark(c: &mut Criterion) {
    let universe = Rectangle::new((0., 0.).into(), (1024., 1024.).into());
    let mut group = c.benchmark_group("build");

    for &num_rects in [1_000usize, 10_000].iter() {
        let rects = get_rectangles(universe, num_rects, 342);
        for &max_load in [8usize, 16].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("quad_tree_build.{}", num_rects), max_load),
                &max_load,
                |b, &m| {
                    b.iter(|| {
                        let mut tree = QuadTree::new(m, 1., 0., 0., 1024., 1024.).unwrap();
                        for rect in rects.iter().copied() {
                            let _ = tree.insert(rect);
                        }
                        tree.len()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, construction_benchmark);
criterion_main!(benches);

//// Utility functions

fn get_rectangles(universe: Rectangle, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Rectangle::new(
            Coordinate::new(
                rng.gen_range(universe.x_min, universe.x_max),
                rng.gen_range(universe.y_min, universe.y_max),
            ),
            Coordinate::new(
                rng.gen_range(universe.x_min, universe.x_max),
                rng.gen_range(universe.y_min, universe.y_max),
            ),
        ));
    }
    results
}
