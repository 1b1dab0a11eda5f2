//! Criterion benchmarks for vector arithmetic and map application.
//! Inputs are replayed in-disc draws so runs are comparable across machines.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::rand::{draw_in_disc, ReplayToken};
use planar::{LinearMap, Vec2};

fn draw_pairs(n: usize, seed: u64) -> Vec<(Vec2, Vec2)> {
    (0..n as u64)
        .map(|i| {
            (
                draw_in_disc(45.0, ReplayToken::new(seed, 2 * i)),
                draw_in_disc(45.0, ReplayToken::new(seed, 2 * i + 1)),
            )
        })
        .collect()
}

fn bench_vec2(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec2");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("add", n), &n, |b, &n| {
            b.iter_batched(
                || draw_pairs(n, 43),
                |pairs| {
                    for (u, w) in pairs {
                        let _sum = u.add(w).unwrap();
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("dot", n), &n, |b, &n| {
            b.iter_batched(
                || draw_pairs(n, 44),
                |pairs| {
                    let mut acc = 0.0;
                    for (u, w) in pairs {
                        acc += u.dot(w);
                    }
                    acc
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("linmap");
    let rotation = LinearMap::rotation(1.234);
    let shear = LinearMap::shear(std::f64::consts::FRAC_PI_3).unwrap();
    for &n in &[100usize, 1_000, 10_000] {
        for (label, map) in [("rotation", rotation), ("shear", shear)] {
            group.bench_with_input(
                BenchmarkId::new(format!("{label}_round_trip"), n),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || draw_pairs(n, 45),
                        |pairs| {
                            for (u, _) in pairs {
                                let image = map.apply(u).unwrap();
                                let _back = map.invert(image).unwrap();
                            }
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_vec2, bench_maps);
criterion_main!(benches);
