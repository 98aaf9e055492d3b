use criterion::{criterion_group, BatchSize, Criterion, Throughput};
use radix_set::{
    tests_common::{generate_key_fixed_length, generate_keys_skewed, generate_words},
    AsSymbols, RadixSet,
};
use std::time::Duration;

fn gen_group<K, S>(c: &mut Criterion, group: &str, keys: Vec<K>, num_symbols: u64)
where
    K: AsSymbols<Symbol = S> + Clone,
    S: PartialEq + Clone,
{
    let mut group = c.benchmark_group(group);
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(15));
    group.throughput(Throughput::Elements(num_symbols));
    group.bench_function("insert", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut set = RadixSet::new();
                for key in keys {
                    assert!(set.insert(key));
                }
                set
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench(c: &mut Criterion) {
    let skewed: Vec<_> = generate_keys_skewed(u8::MAX as usize).collect();
    let fixed_length: Vec<_> = generate_key_fixed_length(8, 16).collect();
    let words: Vec<_> = generate_words(10_000).collect();

    let skewed_symbols = skewed.iter().map(|k| k.len() as u64).sum();
    let fixed_length_symbols = fixed_length.iter().map(|k| k.len() as u64).sum();
    let words_symbols = words.iter().map(|w| w.chars().count() as u64).sum();

    gen_group(c, "generated_insert/skewed", skewed, skewed_symbols);
    gen_group(
        c,
        "generated_insert/fixed_length",
        fixed_length,
        fixed_length_symbols,
    );
    gen_group(c, "generated_insert/words", words, words_symbols);
}

criterion_group!(bench_generated_insert_group, bench);
