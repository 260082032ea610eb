#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names,
    clippy::arithmetic_side_effects
)]
use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use probemap::{DoubleHashingMap, LinearProbingMap};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn probing_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Probing map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    let mut linear_map = LinearProbingMap::with_capacity(4 * ITEMS_AMOUNT);
    let mut double_map = DoubleHashingMap::with_capacity(4 * ITEMS_AMOUNT);
    let mut rust_map = HashMap::new();

    group.bench_function("linear probing insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                linear_map.insert(key, value).unwrap();
            }
        });
    });
    group.bench_function("double hashing insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                double_map.insert(key, value).unwrap();
            }
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });

    group.bench_function("linear probing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = linear_map.get(key);
            }
        });
    });
    group.bench_function("double hashing get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = double_map.get(key);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, probing_map_benches);

criterion_main!(benches);
