//! Micro-benchmarks for nested lookup and builder accumulation.

use criterion::{criterion_group, criterion_main, Criterion};
use datakit_core::{Container, DataBuilder, DataContainer};
use serde_json::json;
use std::hint::black_box;

fn nested_fixture() -> DataContainer {
    DataContainer::new(json!({
        "level1": {
            "level2": {
                "level3": {
                    "count": "1234",
                    "name": "  deep value  ",
                    "flags": [true, false, true]
                }
            }
        }
    }))
}

fn bench_nested_get(c: &mut Criterion) {
    let container = nested_fixture();
    c.bench_function("get nested i64", |b| {
        b.iter(|| {
            black_box(container.get_i64(
                black_box(["level1", "level2", "level3", "count"]),
                0,
            ))
        })
    });
    c.bench_function("get nested trimmed string", |b| {
        b.iter(|| {
            black_box(container.get_string(
                black_box(["level1", "level2", "level3", "name"]),
                "",
            ))
        })
    });
}

fn bench_builder_fill(c: &mut Criterion) {
    c.bench_function("builder fill 100 keys", |b| {
        b.iter(|| {
            let mut builder = DataBuilder::new();
            for i in 0..100 {
                builder.set_i64(format!("key{i}"), json!(i), Some(0));
            }
            black_box(builder.into_value())
        })
    });
}

criterion_group!(benches, bench_nested_get, bench_builder_fill);
criterion_main!(benches);
