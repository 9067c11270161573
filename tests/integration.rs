// SPDX-License-Identifier: MPL-2.0
//! End-to-end gesture scenarios through the public API.

use approx::assert_abs_diff_eq;
use iced_scrub::application::port::MediaSurface;
use iced_scrub::config::{self, Config, GestureConfig};
use iced_scrub::domain::gesture::{Effect, MouseButton, PointerSample, TapOutcome};
use iced_scrub::domain::media::SurfaceGeometry;
use iced_scrub::gesture::{GestureController, GestureOptions};
use iced_scrub::infrastructure::{ManualClock, MemorySurface};
use iced_scrub::input::InputEvent;
use iced_scrub::trace::Trace;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

fn controller(
    surface: MemorySurface,
    options: GestureOptions,
) -> GestureController<MemorySurface, ManualClock> {
    GestureController::with_clock(surface, ManualClock::new(), options)
}

fn standard_surface() -> MemorySurface {
    MemorySurface::new(SurfaceGeometry::new(0.0, 1000.0), 100.0).with_current_time(50.0)
}

#[test]
fn scrub_then_quick_release_resumes_without_muting() {
    let mut controller = controller(standard_surface(), GestureOptions::default());

    controller.handle(&InputEvent::primary_down(500.0, 500.0));
    assert_eq!(controller.surface().pause_count(), 1);
    assert!(!controller.is_playing());

    controller.handle(&InputEvent::MouseMove { x: 520.0, y: 500.0 });
    assert_abs_diff_eq!(controller.current_time(), 52.0, epsilon = 1e-9);

    controller.clock().advance(Duration::from_millis(100));
    let effect = controller.handle(&InputEvent::MouseUp);

    assert_eq!(
        effect,
        Effect::Released {
            resumed: true,
            tap: TapOutcome::FastDrag
        }
    );
    assert!(controller.is_playing());
    assert!(controller.is_muted());
}

#[test]
fn upward_drag_unmutes_and_raises_volume() {
    let surface = standard_surface().with_volume(0.5).with_muted(true);
    let mut controller = controller(surface, GestureOptions::default());

    controller.pointer_down(PointerSample::new(500.0, 500.0), MouseButton::Primary);
    controller.pointer_move(PointerSample::new(500.0, 490.0));

    assert!(!controller.is_muted());
    assert!(!controller.surface().muted());
    assert_abs_diff_eq!(controller.volume(), 0.55, epsilon = 1e-6);
}

#[test]
fn quick_tap_mutes_an_unmuted_controller() {
    let options = GestureOptions {
        start_muted: false,
        ..GestureOptions::default()
    };
    let mut controller = controller(standard_surface(), options);

    controller.pointer_down(PointerSample::new(10.0, 10.0), MouseButton::Primary);
    controller.clock().advance(Duration::from_millis(50));
    controller.pointer_up();

    assert!(controller.is_muted());
    assert!(controller.surface().muted());
}

#[test]
fn diagonal_samples_never_seek_when_volume_threshold_crossed() {
    let mut controller = controller(standard_surface().with_volume(0.5), GestureOptions::default());
    controller.pointer_down(PointerSample::new(0.0, 0.0), MouseButton::Primary);

    let mut position = PointerSample::new(0.0, 0.0);
    for step in 0..10 {
        let dy = if step % 2 == 0 { 6.0 } else { -6.0 };
        position = PointerSample::new(position.x + 40.0, position.y + dy);
        let effect = controller.pointer_move(position);
        assert!(matches!(effect, Effect::VolumeAdjusted { .. }));
        assert_abs_diff_eq!(controller.current_time(), 50.0);
    }
}

#[test]
fn press_and_release_without_drag_always_resumes() {
    for release in [InputEvent::MouseUp, InputEvent::MouseLeave] {
        let mut controller = controller(standard_surface(), GestureOptions::default());
        controller.handle(&InputEvent::primary_down(1.0, 1.0));
        controller.clock().advance(Duration::from_millis(500));
        controller.handle(&release);
        assert!(controller.is_playing(), "{release:?} should resume playback");
    }
}

#[test]
fn tap_toggles_exactly_once_and_repeated_releases_do_nothing() {
    let mut controller = controller(standard_surface(), GestureOptions::default());
    controller.handle(&InputEvent::primary_down(1.0, 1.0));
    controller.handle(&InputEvent::MouseUp);
    controller.handle(&InputEvent::MouseUp);
    controller.handle(&InputEvent::MouseLeave);

    assert!(!controller.is_muted());
    assert_eq!(controller.surface().play_count(), 1);
}

#[test]
fn activation_jumps_ten_seconds_each_way() {
    let mut controller = controller(standard_surface(), GestureOptions::default());

    controller.activate(750.0);
    assert_abs_diff_eq!(controller.current_time(), 60.0);
    controller.activate(250.0);
    controller.activate(250.0);
    assert_abs_diff_eq!(controller.current_time(), 40.0);

    for _ in 0..10 {
        controller.activate(999.0);
    }
    assert_abs_diff_eq!(controller.current_time(), 100.0);
    for _ in 0..20 {
        controller.activate(0.0);
    }
    assert_abs_diff_eq!(controller.current_time(), 0.0);
}

#[test]
fn controller_can_borrow_a_host_owned_surface() {
    let mut surface = standard_surface();
    {
        let mut controller = GestureController::new(&mut surface, GestureOptions::default());
        controller.activate(900.0);
    }
    assert_abs_diff_eq!(surface.current_time(), 60.0);
}

#[test]
fn independent_controllers_do_not_share_state() {
    let mut first = controller(standard_surface(), GestureOptions::default());
    let mut second = controller(standard_surface(), GestureOptions::default());

    first.pointer_down(PointerSample::new(0.0, 0.0), MouseButton::Primary);
    first.pointer_up();

    assert!(!first.is_muted());
    assert!(second.is_muted());
    assert!(!second.is_dragging());
    assert_eq!(second.pointer_up(), Effect::None);
}

#[test]
fn config_file_enables_symmetric_touch() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        gesture: GestureConfig {
            start_muted: Some(true),
            symmetric_touch: Some(true),
            clamp_drag_seek: Some(false),
        },
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut controller = controller(standard_surface(), GestureOptions::from(&loaded));
    assert!(controller.options().symmetric_touch);
    assert!(!controller.options().clamp_drag_seek);
    assert_eq!(
        controller.handle(&InputEvent::touch_start(10.0, 10.0)),
        Effect::HoldStarted
    );
    let effect = controller.handle(&InputEvent::TouchEnd);
    assert_eq!(
        effect,
        Effect::Released {
            resumed: true,
            tap: TapOutcome::MuteToggled { muted: false }
        }
    );
}

#[test]
fn bundled_trace_replays() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("traces/scrub_then_tap.toml");
    let trace = Trace::load(&path).expect("bundled trace should load");
    let report = trace.replay(GestureOptions::default());

    // Scrub +2 s, tap unmutes, activation on the right half jumps +10 s.
    assert_abs_diff_eq!(report.surface.current_time(), 62.0, epsilon = 1e-9);
    assert!(!report.muted);
    assert!(!report.surface.muted());
    assert!(!report.surface.paused());
    assert_eq!(report.effects().count(), 6);
}

#[test]
fn trace_written_to_disk_round_trips_through_loader() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("trace.toml");
    std::fs::write(
        &path,
        r#"
        [surface]
        width = 200.0
        duration = 20.0

        [[event]]
        at_ms = 0
        event = { kind = "touch-move", touches = [{ x = 50.0, y = 0.0 }] }
        "#,
    )
    .expect("Failed to write trace");

    let report = Trace::load(&path)
        .expect("trace should load")
        .replay(GestureOptions::default());

    // Touch moves are interpreted from the origin even without a touch-start.
    assert_abs_diff_eq!(report.surface.current_time(), 5.0, epsilon = 1e-9);
}
