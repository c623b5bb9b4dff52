//! Lanai Benchmarks
//!
//! Criterion benchmarks for the path trie.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use lanai_lib::data_structures::{DelimiterSplitter, SyncTrie, Trie};

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key/{}/{}", i % 97, i)).collect()
}

fn bench_path_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let keys = keys(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("upsert_chars", size), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = Trie::new();
                for (i, key) in keys.iter().enumerate() {
                    trie.upsert(key, black_box(i)).unwrap();
                }
                trie
            });
        });

        group.bench_with_input(BenchmarkId::new("upsert_segments", size), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = Trie::with_splitter(DelimiterSplitter::new("/"));
                for (i, key) in keys.iter().enumerate() {
                    trie.upsert(key, black_box(i)).unwrap();
                }
                trie
            });
        });

        let mut trie = Trie::new();
        for (i, key) in keys.iter().enumerate() {
            trie.upsert(key, i).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("query", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(trie.query(key).unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("query_by_prefix", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.query_by_prefix("key/1", None)));
        });

        let shared = SyncTrie::from_trie(trie);
        group.bench_with_input(BenchmarkId::new("sync_query", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(shared.query(key).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_path_trie);
criterion_main!(benches);
