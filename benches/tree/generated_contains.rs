use criterion::{criterion_group, Criterion};
use radix_set::{
    tests_common::{generate_keys_skewed, generate_words},
    RadixSet,
};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(69420);

    let words: Vec<_> = generate_words(10_000).collect();
    let searches: Vec<_> = words.choose_multiple(&mut rng, 1_000).cloned().collect();
    let misses: Vec<_> = searches.iter().map(|word| format!("{word}!")).collect();
    let word_set: RadixSet<char> = words.iter().collect();

    let skewed: Vec<_> = generate_keys_skewed(u8::MAX as usize).collect();
    let skewed_set: RadixSet<u8> = skewed.iter().collect();

    let mut group = c.benchmark_group("generated_contains");
    group.bench_function("words/hit", |b| {
        b.iter(|| {
            for search in &searches {
                black_box(word_set.contains(search));
            }
        });
    });
    group.bench_function("words/miss", |b| {
        b.iter(|| {
            for search in &misses {
                black_box(word_set.contains(search));
            }
        });
    });
    group.bench_function("skewed/hit", |b| {
        b.iter(|| {
            for key in &skewed {
                black_box(skewed_set.contains(key));
            }
        });
    });
}

criterion_group!(bench_generated_contains_group, bench);
