//! Mock storage benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mock_storage_adapter::prelude::*;

fn nested_value() -> StorageValue {
    StorageValue::try_from(serde_json::json!({
        "user": { "name": "ada", "tags": ["a", "b", "c"] },
        "history": [1, 2, 3, 4, 5, 6, 7, 8],
    }))
    .unwrap()
}

fn benchmark_set_get(c: &mut Criterion) {
    let storage = MockStorageAdapter::new();
    let value = nested_value();

    c.bench_function("set_get_nested", |b| {
        b.iter(|| {
            storage.set_item_sync("bench", black_box(value.clone())).unwrap();
            black_box(storage.get_item_sync("bench").unwrap());
        })
    });
}

fn benchmark_key_scan(c: &mut Criterion) {
    let storage = MockStorageAdapter::new();
    for i in 0..1_000 {
        storage.set_item_sync(&format!("key-{}", i), StorageValue::from(i)).unwrap();
    }

    c.bench_function("key_scan_1k", |b| {
        b.iter(|| {
            let size = storage.size_sync().unwrap();
            for index in 0..size {
                black_box(storage.key_sync(index).unwrap());
            }
        })
    });
}

criterion_group!(benches, benchmark_set_get, benchmark_key_scan);
criterion_main!(benches);
