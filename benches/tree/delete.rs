use criterion::{criterion_group, BatchSize, Criterion};
use radix_set::{
    tests_common::{generate_key_fixed_length, generate_words},
    RadixSet,
};

fn bench(c: &mut Criterion) {
    let words: Vec<_> = generate_words(10_000).collect();
    let word_set: RadixSet<char> = words.iter().collect();

    let fixed_length: Vec<_> = generate_key_fixed_length(8, 16).collect();
    let fixed_length_set: RadixSet<u8> = fixed_length.iter().collect();

    let mut group = c.benchmark_group("delete");
    group.bench_function("words/all", |b| {
        b.iter_batched(
            || word_set.clone(),
            |mut set| {
                for word in &words {
                    assert!(set.delete(word));
                }
                set
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("fixed_length/all", |b| {
        b.iter_batched(
            || fixed_length_set.clone(),
            |mut set| {
                for key in &fixed_length {
                    assert!(set.delete(key));
                }
                set
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(bench_delete_group, bench);
