//! Benchmarks for scroll and extent queries on large axes.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridview::{ScrollAxis, SizeIndex};

/// 100k-line axis with a sprinkling of overrides, like a real sheet.
fn large_axis() -> SizeIndex {
    let mut axis = SizeIndex::new(100_000, 25.0);
    for i in (0..100_000).step_by(97) {
        axis.set(i, 40.0);
    }
    for i in (0..100_000).step_by(503) {
        axis.set_hidden(i, true);
    }
    axis
}

/// Wheel scrolling: many small deltas, each crossing a handful of lines.
fn bench_incremental_scroll(c: &mut Criterion) {
    let axis = large_axis();

    c.bench_function("scroll_wheel_sequence", |b| {
        b.iter(|| {
            let mut scroll = ScrollAxis::new();
            let mut value = 0.0;
            for _ in 0..1_000 {
                value += 120.0;
                black_box(scroll.scroll_to(black_box(value), &axis));
            }
            scroll.anchor()
        })
    });
}

/// A single long jump from the origin deep into the axis.
fn bench_scroll_jump(c: &mut Criterion) {
    let axis = large_axis();

    c.bench_function("scroll_jump_deep", |b| {
        b.iter(|| {
            let mut scroll = ScrollAxis::new();
            black_box(scroll.scroll_to(black_box(1_000_000.0), &axis)).anchor
        })
    });
}

/// Extent queries stay bounded by the override count, not the axis length.
fn bench_extent(c: &mut Criterion) {
    let axis = large_axis();

    c.bench_function("extent_full_axis", |b| {
        b.iter(|| black_box(axis.total()))
    });

    c.bench_function("extent_window", |b| {
        b.iter(|| black_box(axis.extent(black_box(50_000), black_box(50_040))))
    });
}

/// Discrete paging across the axis.
fn bench_step(c: &mut Criterion) {
    let axis = large_axis();

    c.bench_function("step_paging", |b| {
        b.iter(|| {
            let mut scroll = ScrollAxis::new();
            for _ in 0..100 {
                black_box(scroll.step_by(black_box(20), &axis));
            }
            scroll.value()
        })
    });
}

criterion_group!(
    benches,
    bench_incremental_scroll,
    bench_scroll_jump,
    bench_extent,
    bench_step
);
criterion_main!(benches);
