use criterion::{criterion_group, Criterion};
use radix_set::match_prefix;
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    let label_small = [0u8; 8];
    let label_large = [0u8; 32];

    let key_small_match = [0u8; 16];
    let key_small_mismatch = [0u8, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
    let key_large_match = [0u8; 48];
    let mut key_large_mismatch = [0u8; 48];
    key_large_mismatch[24..].fill(1);
    let key_over = [0u8; 4];

    let mut group = c.benchmark_group("match_prefix");
    group.bench_function("small/match", |b| {
        b.iter(|| black_box(match_prefix(&label_small, black_box(&key_small_match))));
    });
    group.bench_function("small/mismatch", |b| {
        b.iter(|| black_box(match_prefix(&label_small, black_box(&key_small_mismatch))));
    });
    group.bench_function("small/over", |b| {
        b.iter(|| black_box(match_prefix(&label_small, black_box(&key_over))));
    });
    group.bench_function("large/match", |b| {
        b.iter(|| black_box(match_prefix(&label_large, black_box(&key_large_match))));
    });
    group.bench_function("large/mismatch", |b| {
        b.iter(|| black_box(match_prefix(&label_large, black_box(&key_large_mismatch))));
    });
    group.bench_function("large/over", |b| {
        b.iter(|| black_box(match_prefix(&label_large, black_box(&key_over))));
    });
}

criterion_group!(bench_match_prefix_group, bench);
