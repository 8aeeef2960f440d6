use bigfact::{factorial_bigint, log2_factorial, normalize, BigUInt};

fn test_factorial_400() {
    black_box(factorial_bigint(400).unwrap());
}

fn test_factorial_25() {
    black_box(factorial_bigint(25).unwrap());
}

fn test_mul_small_wide() {
    let mut a: BigUInt = BigUInt::from_u32(1);
    for _ in 0..80 {
        a.inplace_mul_small(4000000007).unwrap();
    }
    black_box(a);
}

fn test_as_decimal() {
    let a = factorial_bigint(449).unwrap();
    black_box(a.as_decimal());
}

fn test_log2_factorial() {
    black_box(normalize(log2_factorial(100000)));
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_factorial_25", |b| b.iter(test_factorial_25));
    c.bench_function("test_factorial_400", |b| b.iter(test_factorial_400));
    c.bench_function("test_mul_small_wide", |b| b.iter(test_mul_small_wide));
    c.bench_function("test_as_decimal", |b| b.iter(test_as_decimal));
    c.bench_function("test_log2_factorial", |b| b.iter(test_log2_factorial));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
