use criterion::{criterion_group, criterion_main, Criterion};

use passforge::{composer, pools};

fn criterion_benchmark_generate_16_chars(c: &mut Criterion) {
    c.bench_function("generate 16 char password", |b| {
        b.iter(|| composer::generate_exact(16, pools::DEFAULT_SPECIAL))
    });
}

fn criterion_benchmark_generate_default_bounds(c: &mut Criterion) {
    c.bench_function("generate with default bounds", |b| {
        b.iter(composer::generate)
    });
}

criterion_group!(
    benches,
    criterion_benchmark_generate_16_chars,
    criterion_benchmark_generate_default_bounds
);
criterion_main!(benches);
