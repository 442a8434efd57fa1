use common::shapes::LongPoint;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use long_quadtree::LongQuadTreeObjects;
use rand::prelude::*;

const EXTENT: i64 = 1_000_000;

fn random_point(rng: &mut impl Rng) -> LongPoint {
    LongPoint::new(rng.gen_range(-EXTENT..EXTENT), rng.gen_range(-EXTENT..EXTENT))
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut index = LongQuadTreeObjects::with_xy(32);

    c.bench_function("long_quadtree_insert", |b| {
        b.iter(|| {
            index.add(black_box(random_point(&mut rng)));
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut index = LongQuadTreeObjects::with_xy(32);
    let mut items = Vec::new();
    for _ in 0..10_000 {
        let p = random_point(&mut rng);
        index.add(p);
        items.push(p);
    }

    c.bench_function("long_quadtree_remove_add", |b| {
        b.iter(|| {
            let p = items[rng.gen_range(0..items.len())];
            index.remove(black_box(&p));
            index.add(p);
        })
    });
}

fn search_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut index = LongQuadTreeObjects::with_xy(32);
    for _ in 0..100_000 {
        index.add(random_point(&mut rng));
    }
    let mut results = Vec::new();

    c.bench_function("long_quadtree_search", |b| {
        b.iter(|| {
            let corner = random_point(&mut rng);
            results.clear();
            let found = index.search_into(
                corner.x,
                corner.x + 20_000,
                corner.y,
                corner.y + 20_000,
                &mut results,
            );
            black_box(found);
        })
    });
}

criterion_group!(
    long_quadtree_benchmarks,
    insert_benchmark,
    remove_benchmark,
    search_benchmark
);
criterion_main!(long_quadtree_benchmarks);
