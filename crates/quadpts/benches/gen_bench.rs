//! Criterion microbenches for point-set generation and lookups.
//!
//! - 1-D provider: Gauss-Legendre for n in {2, 5, 10, 20}.
//! - Generator: LE in 1D/2D/3D, Wilson 5/8-point rules.
//! - Stores: standard-set build, legacy load, hot-path lookup.
//!
//! Results live under `target/criterion`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadpts::api::{
    generate, Domain, ElementFamily, GaussLegendre, LegacyTable, RuleKind, RuleParams,
    StandardSets,
};

fn bench_gauss(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss");
    let gl = GaussLegendre::default();
    for &n in &[2usize, 5, 10, 20] {
        group.bench_with_input(BenchmarkId::new("reference", n), &n, |b, &n| {
            b.iter(|| gl.reference(black_box(n)))
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let none = RuleParams::default();
    for &(ndim, npts) in &[(1usize, 5usize), (2, 9), (3, 27), (3, 64)] {
        group.bench_with_input(
            BenchmarkId::new("LE", format!("{ndim}d-{npts}")),
            &(ndim, npts),
            |b, &(ndim, npts)| b.iter(|| generate(RuleKind::Le, ndim, black_box(npts), &none)),
        );
    }
    let w5 = RuleParams::with_w0(1.0);
    group.bench_function(BenchmarkId::new("W5", "w0=1"), |b| {
        b.iter(|| generate(RuleKind::W5, 2, 5, black_box(&w5)))
    });
    let w8 = RuleParams::with_wb(0.5);
    group.bench_function(BenchmarkId::new("W8", "wb=0.5"), |b| {
        b.iter(|| generate(RuleKind::W8, 2, 8, black_box(&w8)))
    });
    group.finish();
}

fn bench_stores(c: &mut Criterion) {
    let mut group = c.benchmark_group("stores");
    group.bench_function("standard_sets_build", |b| b.iter(StandardSets::build));
    group.bench_function("legacy_load", |b| b.iter(LegacyTable::load));

    let sets = StandardSets::build().unwrap();
    let legacy = LegacyTable::load().unwrap();
    group.bench_function("lookup_qua_le9", |b| {
        b.iter(|| sets.lookup(ElementFamily::Qua, RuleKind::Le, black_box(9)))
    });
    group.bench_function("lookup_legacy_tri16", |b| {
        b.iter(|| legacy.lookup(Domain::Tri, black_box(16)))
    });
    group.finish();
}

criterion_group!(benches, bench_gauss, bench_generate, bench_stores);
criterion_main!(benches);
