// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast queue operations.
//!
//! Measures the performance of:
//! - Adding toasts into a full queue (eviction on every insert)
//! - Add/remove churn with pending timers
//! - Snapshotting the active queue

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use toast_queue::notifications::{Manager, ToastInput, ToastSettings};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .expect("failed to build runtime")
}

fn bench_queue(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("toast_queue");

    group.bench_function("add_with_eviction", |b| {
        let manager = Manager::new(ToastSettings::default(), rt.handle().clone());
        b.iter(|| {
            black_box(manager.add_toast(ToastInput::new("evicting").persistent()));
        });
    });

    group.bench_function("add_remove_timed", |b| {
        let manager = Manager::new(ToastSettings::default(), rt.handle().clone());
        b.iter(|| {
            let id = manager.add_toast(ToastInput::new("timed").duration_ms(60_000));
            black_box(manager.remove_toast(id));
        });
    });

    group.bench_function("get_active_full", |b| {
        let manager = Manager::new(
            ToastSettings::default().with_max_visible(100),
            rt.handle().clone(),
        );
        for i in 0..100 {
            manager.add_toast(ToastInput::new(format!("toast {i}")).persistent());
        }
        b.iter(|| black_box(manager.get_active()));
    });

    group.finish();
}

criterion_group!(benches, bench_queue);
criterion_main!(benches);
