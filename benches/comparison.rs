use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Matrix multiply, inline regime (under the 144-element threshold)
// ---------------------------------------------------------------------------

fn matmul_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_8x8");

    g.bench_function("smallmat", |b| {
        let a = smallmat::SmallMatrix::from_fn(8, 8, |i, j| (i * 8 + j + 1) as f64);
        let m = smallmat::SmallMatrix::from_fn(8, 8, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(8, 8, |i, j| (i * 8 + j + 1) as f64);
        let m = nalgebra::DMatrix::from_fn(8, 8, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Matrix multiply, heap regime
// ---------------------------------------------------------------------------

fn matmul_50x50(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul_50x50");

    g.bench_function("smallmat", |b| {
        let a = smallmat::SmallMatrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        let m = smallmat::SmallMatrix::from_fn(50, 50, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::DMatrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        let m = nalgebra::DMatrix::from_fn(50, 50, |i, j| (i + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Transpose across the two regimes
// ---------------------------------------------------------------------------

fn transpose(c: &mut Criterion) {
    let mut g = c.benchmark_group("transpose");

    g.bench_function("smallmat_8x8", |b| {
        let a = smallmat::SmallMatrix::from_fn(8, 8, |i, j| (i * 8 + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a).transpose())
    });

    g.bench_function("smallmat_50x50", |b| {
        let a = smallmat::SmallMatrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a).transpose())
    });

    g.bench_function("nalgebra_50x50", |b| {
        let a = nalgebra::DMatrix::from_fn(50, 50, |i, j| (i * 50 + j + 1) as f64);
        b.iter(|| std::hint::black_box(&a).transpose())
    });

    g.finish();
}

criterion_group!(benches, matmul_8x8, matmul_50x50, transpose);
criterion_main!(benches);
