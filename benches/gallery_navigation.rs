// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Deriving a presentation snapshot
//! - Navigation transitions (next/previous)
//! - A full forward-and-back sweep of the collection

use criterion::{criterion_group, criterion_main, Criterion};
use art_space::gallery::{Gallery, GalleryNavigator};
use std::hint::black_box;

/// Benchmark deriving the presentation snapshot.
///
/// The snapshot is recomputed on every read, so this is the per-frame cost
/// the rendering layer pays.
fn bench_presentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let navigator = GalleryNavigator::new(Gallery::builtin());

    group.bench_function("presentation", |b| {
        b.iter(|| {
            black_box(navigator.presentation());
        });
    });

    group.finish();
}

/// Benchmark navigation transitions.
fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("next_and_previous", |b| {
        let mut navigator = GalleryNavigator::new(Gallery::builtin());
        b.iter(|| {
            navigator.next();
            navigator.previous();
            black_box(navigator.current_index());
        });
    });

    group.bench_function("full_sweep", |b| {
        b.iter(|| {
            let mut navigator = GalleryNavigator::new(Gallery::builtin());
            while navigator.presentation().can_go_next {
                navigator.next();
            }
            while navigator.presentation().can_go_previous {
                navigator.previous();
            }
            black_box(navigator.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_presentation, bench_transitions);
criterion_main!(benches);
