//! Benchmarks for shape sampling and per-frame animation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morphcloud::shapes::{generate, generate_with};
use morphcloud::{AnimatorConfig, ParticleAnimator, ShapeId, SpawnContext, PARTICLE_COUNT};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for shape in ShapeId::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(shape), &shape, |b, &shape| {
            let mut ctx = SpawnContext::seeded(PARTICLE_COUNT, 42);
            b.iter(|| black_box(generate_with(shape, &mut ctx)))
        });
    }

    group.finish();
}

fn bench_generate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_scaling");

    for count in [1_000, 5_000, 20_000] {
        group.bench_with_input(BenchmarkId::new("tree", count), &count, |b, &count| {
            let mut ctx = SpawnContext::seeded(count, 7);
            b.iter(|| black_box(generate_with(ShapeId::Tree, &mut ctx)))
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("morph", |b| {
        let mut animator =
            ParticleAnimator::new(ShapeId::Tree, generate(ShapeId::Tree), AnimatorConfig::default());
        animator.on_shape_selected(ShapeId::Bell, generate(ShapeId::Bell), 0.0);
        let mut t = 0.0;
        b.iter(|| {
            t += 1.0 / 60.0;
            animator.tick(black_box(t), 1.0 / 60.0);
        })
    });

    group.bench_function("launch", |b| {
        let mut animator =
            ParticleAnimator::new(ShapeId::Tree, generate(ShapeId::Tree), AnimatorConfig::default());
        animator.on_shape_selected(ShapeId::Firework, generate(ShapeId::Firework), 0.0);
        // Elapsed stays inside the launch window.
        b.iter(|| animator.tick(black_box(0.5), 1.0 / 60.0))
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_generate_scaling, bench_tick);
criterion_main!(benches);
