use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use oidpath_resolver::resolve;

fn bench_resolve(c: &mut Criterion) {
    // Force the one-time registry build out of the measured region.
    resolve(&[0]);

    c.bench_function("resolve_pkcs1_sha256", |b| {
        b.iter(|| resolve(black_box(&[1, 2, 840, 113549, 1, 1, 11])))
    });
    c.bench_function("resolve_deep_h248", |b| {
        b.iter(|| resolve(black_box(&[0, 0, 8, 248, 0, 0, 2])))
    });
    c.bench_function("resolve_unregistered_root", |b| {
        b.iter(|| resolve(black_box(&[9, 9, 9])))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
