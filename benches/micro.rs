//! Micro-benchmarks for the ordo collections.
//!
//! Uses Criterion for statistically rigorous measurement with regression
//! detection and HTML reports.
//!
//! # Running
//!
//! ```bash
//! cargo bench --bench micro              # run all micro-benchmarks
//! cargo bench --bench micro -- map       # filter by name
//! ```
//!
//! Reports are generated in `target/criterion/report/index.html`.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use ordo::{CollectionConfig, Element, OrderedList, OrderedMap, Query};

// ------------------------------------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------------------------------------

const SIZES: &[u64] = &[100, 10_000];

/// Format a zero-padded key.
fn make_key(i: u64) -> String {
    format!("key-{i:012}")
}

fn filled_map(count: u64) -> OrderedMap<String, u64> {
    (0..count).map(|i| (make_key(i), i)).collect()
}

fn elements(count: u64) -> Vec<Element> {
    (0..count)
        .map(|i| Element::new(format!("E{i}"), format!("element-{:06}", (i * 7919) % count), i as u32))
        .collect()
}

// ================================================================================================
// List benchmarks
// ================================================================================================

/// `remove_where` on a list of sequential integers, removing every odd value.
///
/// **What it measures:** single-pass retain cost; should scale linearly.
fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("remove_where_odd", size), &size, |b, &size| {
            b.iter_batched(
                || (0..size).collect::<OrderedList<u64>>(),
                |mut list| {
                    list.remove_where(|n| n % 2 == 1);
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("append", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = OrderedList::new();
                for i in 0..size {
                    list.append(black_box(i));
                }
                list
            });
        });
    }

    group.finish();
}

// ================================================================================================
// Map benchmarks
// ================================================================================================

/// Point lookups, inserts and removal-heavy workloads on [`OrderedMap`].
///
/// `remove_half` exercises tombstone compaction: half of the keys are
/// removed, so compaction runs repeatedly at the default ratio.
fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::new("set", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = OrderedMap::with_config(&CollectionConfig {
                    initial_capacity: size as usize,
                    ..CollectionConfig::default()
                })
                .unwrap();
                for i in 0..size {
                    map.set(make_key(i), i);
                }
                map
            });
        });

        let map = filled_map(size);
        let keys: Vec<String> = (0..size).map(make_key).collect();
        group.bench_with_input(BenchmarkId::new("get_hit", size), &size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(map.get(key.as_str()).unwrap());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("remove_half", size), &size, |b, &size| {
            b.iter_batched(
                || filled_map(size),
                |mut map| {
                    for i in (0..size).step_by(2) {
                        map.remove(make_key(i).as_str());
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ================================================================================================
// Query benchmarks
// ================================================================================================

/// Full filter → order_by → select pipeline over owned records.
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("pipeline", size), &size, |b, &size| {
            b.iter_batched(
                || elements(size),
                |source| {
                    Query::new(source)
                        .filter(|e| e.atomic_number % 3 != 0)
                        .order_by(|e| e.name.clone())
                        .select(|e| e.symbol)
                        .to_vec()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_list, bench_map, bench_query);
criterion_main!(benches);
