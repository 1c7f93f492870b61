mod utils;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use quadtree_index::{QuadTree, Rectangle};
use utils::{get_random_points, get_random_rects};

pub fn query_benchmark(c: &mut Criterion) {
    let universe = Rectangle::new((0., 0.).into(), (1024., 1024.).into());
    let rects = get_random_rects(universe, 10_000, 342);
    let query_rects: Vec<Rectangle> = get_random_points(universe, 1000, 192)
        .into_iter()
        .map(|p| Rectangle::new(p, p))
        .collect();
    let mut group = c.benchmark_group("query");

    for &max_load in [8usize, 16].iter() {
        let mut tree = QuadTree::new(max_load, 1., 0., 0., 1024., 1024.).unwrap();
        for rect in rects.iter().copied() {
            let _ = tree.insert(rect);
        }

        group.bench_function(BenchmarkId::new("quad_tree_query", max_load), |b| {
            let mut query_iter = query_rects.iter().cycle();
            b.iter_batched(
                move || query_iter.next().unwrap(),
                |probe| tree.query_rect(probe).count(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, query_benchmark);

criterion_main!(benches);
