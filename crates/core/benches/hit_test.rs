use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use strum::IntoEnumIterator;
use tessera::{Point2, TileDimension, TileFamily, TileMap};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit-testing");

    for family in TileFamily::iter() {
        let map = TileMap::unlabeled(family, 64, 64).unwrap();
        let dim = TileDimension::new(family, 32).unwrap();
        let size = map.pixel_size(&dim).unwrap();

        // Same points every run, so runs are comparable
        let mut rng = Pcg64::seed_from_u64(0);
        let points: Vec<Point2> = (0..1000)
            .map(|_| {
                Point2::new(rng.gen_range(0.0..size.x), rng.gen_range(0.0..size.y))
            })
            .collect();

        group.bench_function(format!("point to coord ({})", family), |b| {
            b.iter(|| {
                for point in &points {
                    black_box(map.point_to_coord(black_box(*point), &dim))
                        .unwrap();
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
