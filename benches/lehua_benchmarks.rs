//! Lehua Benchmarks
//!
//! Criterion benchmarks for the prefix trie.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lehua_lib::data_structures::prefix_trie::Trie;
use std::time::Duration;

/// Deterministic pseudo-words over a 26-letter alphabet.
fn generate_words(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    b'a' + (state % 26) as u8
                })
                .collect()
        })
        .collect()
}

fn build(words: &[Vec<u8>]) -> Trie<u8> {
    let mut trie = Trie::new();
    for word in words {
        trie.store(word);
    }
    trie
}

/// Benchmark insertion
fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_trie_store");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = generate_words(*size, 8);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("store", size), &words, |b, words| {
            b.iter(|| black_box(build(words)));
        });
        group.bench_with_input(BenchmarkId::new("try_store", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = Trie::new();
                for word in words {
                    black_box(trie.try_store(word).is_ok());
                }
                trie
            });
        });
    }

    group.finish();
}

/// Benchmark both query classes against a populated trie
fn bench_queries(c: &mut Criterion) {
    let words = generate_words(50_000, 10);
    let trie = build(&words);

    let mut group = c.benchmark_group("prefix_trie_query");
    group.measurement_time(Duration::from_secs(2));

    for prefix_len in [1usize, 2, 4].iter() {
        let prefix = &words[0][..*prefix_len];
        group.bench_with_input(
            BenchmarkId::new("words_starting_with", prefix_len),
            prefix,
            |b, prefix| b.iter(|| black_box(trie.words_starting_with(prefix))),
        );
    }

    group.bench_function("longest_prefix_hit", |b| {
        let input = [words[1].as_slice(), b"zzzz"].concat();
        b.iter(|| black_box(trie.longest_prefix(&input)))
    });
    group.bench_function("longest_prefix_miss", |b| {
        b.iter(|| black_box(trie.longest_prefix(b"0123456789")))
    });

    group.finish();
}

criterion_group!(benches, bench_store, bench_queries);
criterion_main!(benches);
