//! Criterion benchmarks for tank-decay.
//!
//! Targets:
//! - single update < 1µs
//! - sweep of 10K items < 5ms

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tank_core::config::RetentionConfig;
use tank_core::item::{MemoryStrength, ReviewSignal, TrackedItem};
use tank_decay::RetentionEngine;

fn make_bench_items(n: usize) -> Vec<TrackedItem> {
    let now = Utc::now();
    (0..n)
        .map(|i| {
            let mut item =
                TrackedItem::new(format!("bench-{i}"), now, &RetentionConfig::default());
            item.memory_strength = MemoryStrength::new((i % 97) as f64 / 97.0);
            item.last_update = Some(now - Duration::days((i % 45) as i64 + 1));
            item
        })
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let engine = RetentionEngine::new();
    let item = make_bench_items(1).remove(0);
    let signal = ReviewSignal::reviewed(Utc::now(), 3);

    c.bench_function("update_reviewed", |b| {
        b.iter(|| engine.update(black_box(&item), black_box(&signal)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let engine = RetentionEngine::new();
    let items = make_bench_items(10_000);
    let now = Utc::now();

    c.bench_function("sweep_10k", |b| {
        b.iter_batched(
            || items.clone(),
            |mut batch| engine.sweep(&mut batch, now, |_| 2),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_update, bench_sweep);
criterion_main!(benches);
