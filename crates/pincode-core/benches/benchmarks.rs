//! Benchmarks for the hot query paths.
//!
//! Run with: `cargo bench -p pincode-core`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pincode_core::{validate_format, PincodeDb, PincodeValidator};
use std::hint::black_box;

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_format");
    for input in ["110001", "012345", "12a456", "9999999"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, s| {
            b.iter(|| validate_format(black_box(s)))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let v = PincodeValidator::new().unwrap();
    let mut group = c.benchmark_group("get_location_details");
    group.bench_function("exact", |b| {
        b.iter(|| v.get_location_details(black_box("560001")))
    });
    group.bench_function("approximate", |b| {
        b.iter(|| v.get_location_details(black_box("999999")))
    });
    group.finish();
}

fn bench_nearby(c: &mut Criterion) {
    let v = PincodeValidator::new().unwrap();
    let mut group = c.benchmark_group("find_nearby_pincodes");
    for radius in [10.0, 50.0, 500.0] {
        group.bench_with_input(BenchmarkId::new("radius_km", radius), &radius, |b, &r| {
            b.iter(|| v.find_nearby_pincodes(black_box("110001"), r))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    c.bench_function("parse_embedded_table", |b| b.iter(PincodeDb::embedded));
}

criterion_group!(benches, bench_validate, bench_lookup, bench_nearby, bench_load);
criterion_main!(benches);
