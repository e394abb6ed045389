// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;
use ctproofs::{
    common::*,
    hashes::*,
    vector::vector_exponent
};

fn secp256k1_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1");
    group.sample_size(40);
    group.measurement_time(Duration::from_secs(3));


    let params = (random_point(), random_point());
    group.bench_with_input(BenchmarkId::new("Hash", "2 points"), &params,
    |b, (p1, p2) | b.iter(|| {
        black_box(hash_bp(p1, p2));
    }));
    group.bench_with_input(BenchmarkId::new("Scalar", "random"), &(),
    |b, () | b.iter(|| {
        black_box(random_scalar());
    }));
    group.bench_with_input(BenchmarkId::new("Point", "map_to_group"), &"benchmark seed",
    |b, seed | b.iter(|| {
        black_box(map_to_group(seed).unwrap());
    }));


    let params = (random_point(), random_point());
    group.bench_with_input(BenchmarkId::new("Add", "2"), &params,
    |b, (p1, p2) | b.iter(|| {
        black_box(p1 + p2);
    }));
    let params = random_point();
    group.bench_with_input(BenchmarkId::new("Double", "1"), &params,
    |b, p | b.iter(|| {
        black_box(p.double());
    }));


    let params = (random_scalar(), random_point());
    group.bench_with_input(BenchmarkId::new("Multiply", "1"), &params,
    |b, (s, p) | b.iter(|| {
        black_box(p * s);
    }));
    let params = random_scalar();
    group.bench_with_input(BenchmarkId::new("Multiply", "Basepoint"), &params,
    |b, s | b.iter(|| {
        black_box(Point::scalar_mul_base(s));
    }));
    let params = (
        (0..16).map(|_| random_scalar()).collect::<Vec<Scalar>>(),
        (0..16).map(|_| random_point()).collect::<Vec<Point>>()
    );
    group.bench_with_input(BenchmarkId::new("MultiscalarMultiply", "16"), &params,
    |b, (s, p) | b.iter(|| {
        black_box(vector_exponent(p, s).unwrap());
    }));
}

criterion_group!(curve, secp256k1_benchmark);
criterion_main!(curve);
