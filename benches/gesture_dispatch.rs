// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gesture dispatch.
//!
//! Measures the per-event cost of:
//! - A full press/scrub/release drag
//! - Jitter samples that fall under both thresholds
//! - Replaying the bundled trace file

use criterion::{criterion_group, criterion_main, Criterion};
use iced_scrub::domain::media::SurfaceGeometry;
use iced_scrub::gesture::{GestureController, GestureOptions};
use iced_scrub::infrastructure::{ManualClock, MemorySurface};
use iced_scrub::input::InputEvent;
use iced_scrub::trace::Trace;
use std::hint::black_box;
use std::path::PathBuf;

fn surface() -> MemorySurface {
    MemorySurface::new(SurfaceGeometry::new(0.0, 1920.0), 3600.0).with_current_time(1800.0)
}

/// A press, 100 horizontal samples back and forth, and a release.
fn drag_events() -> Vec<InputEvent> {
    let mut events = vec![InputEvent::primary_down(960.0, 540.0)];
    events.extend((0..100).map(|i| {
        let offset = if i % 2 == 0 { 8.0 } else { -8.0 };
        InputEvent::MouseMove {
            x: 960.0 + offset,
            y: 540.0,
        }
    }));
    events.push(InputEvent::MouseUp);
    events
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_dispatch");
    let events = drag_events();

    group.bench_function("press_scrub_release", |b| {
        b.iter(|| {
            let mut controller = GestureController::with_clock(
                surface(),
                ManualClock::new(),
                GestureOptions::default(),
            );
            for event in &events {
                black_box(controller.handle(event));
            }
        });
    });

    group.bench_function("jitter_sample", |b| {
        let mut controller =
            GestureController::with_clock(surface(), ManualClock::new(), GestureOptions::default());
        controller.handle(&InputEvent::primary_down(960.0, 540.0));
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            let x = if toggle { 960.5 } else { 960.0 };
            black_box(controller.handle(&InputEvent::MouseMove { x, y: 540.0 }));
        });
    });

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_replay");
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("traces/scrub_then_tap.toml");
    let trace = Trace::load(&path).unwrap();

    group.bench_function("bundled_trace", |b| {
        b.iter(|| black_box(trace.replay(GestureOptions::default())));
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_replay);
criterion_main!(benches);
