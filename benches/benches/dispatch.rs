// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use sightline_viewpoint::{
    CallbackSet, DispatchMemory, EdgeOffsets, GeometrySnapshot, VisibilityState,
};

fn snapshot(scroll_top: f64) -> GeometrySnapshot {
    GeometrySnapshot::new(
        Size::new(800.0, 600.0),
        Vec2::new(0.0, scroll_top),
        Size::new(100.0, 50.0),
        Point::new(10.0, 700.0),
    )
}

fn bench_compute(c: &mut Criterion) {
    let offsets = EdgeOffsets::UNSET;
    let snap = snapshot(400.0);
    c.bench_function("visibility_state_compute", |b| {
        b.iter(|| VisibilityState::compute(black_box(&snap), black_box(&offsets)));
    });
}

fn bench_step(c: &mut Criterion) {
    let offsets = EdgeOffsets::UNSET;
    let registered = CallbackSet::IN_VIEW | CallbackSet::OFF_VIEW | CallbackSet::AFFIX_TOP;

    // Alternate between an in-view and a below-the-fold snapshot so every
    // pass crosses a transition and exercises the dispatch path.
    let states: [VisibilityState; 2] = [
        VisibilityState::compute(&snapshot(400.0), &offsets),
        VisibilityState::compute(&snapshot(0.0), &offsets),
    ];

    c.bench_function("dispatch_memory_step_transitions", |b| {
        let mut memory = DispatchMemory::new();
        let mut i = 0_usize;
        b.iter(|| {
            let fired = memory.step(black_box(&states[i & 1]), registered);
            i += 1;
            black_box(fired)
        });
    });

    c.bench_function("dispatch_memory_step_steady_state", |b| {
        let mut memory = DispatchMemory::new();
        b.iter(|| black_box(memory.step(black_box(&states[0]), registered)));
    });
}

criterion_group!(benches, bench_compute, bench_step);
criterion_main!(benches);
