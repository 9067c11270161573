// SPDX-License-Identifier: MPL-2.0
//! The gesture state machine.

use super::options::GestureOptions;
use super::session::DragSession;
use crate::application::port::{Clock, MediaSurface};
use crate::config::{
    PROGRESS_DELTA_THRESHOLD, SEEK_STEP_SECS, TAP_DURATION_THRESHOLD, VOLUME_DELTA_THRESHOLD,
};
use crate::domain::gesture::{Effect, MouseButton, PointerSample, TapOutcome};
use crate::domain::media::{known_duration, seek_upper_bound, SeekDirection, Volume};
use crate::infrastructure::MonotonicClock;
use crate::input::InputEvent;

/// How a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Release {
    Up,
    Leave,
}

/// Interprets pointer and touch input on one media surface.
///
/// The controller exclusively owns its interaction state (baselines, the
/// optional drag session and the mute shadow); each surface gets its own
/// instance. Handlers take `&mut self` and run to completion, so a
/// multi-threaded host only needs one lock around the whole controller.
///
/// # Example
///
/// ```
/// use iced_scrub::domain::gesture::{Effect, MouseButton, PointerSample};
/// use iced_scrub::domain::media::SurfaceGeometry;
/// use iced_scrub::gesture::{GestureController, GestureOptions};
/// use iced_scrub::infrastructure::MemorySurface;
///
/// let surface = MemorySurface::new(SurfaceGeometry::new(0.0, 1000.0), 100.0)
///     .with_current_time(50.0);
/// let mut controller = GestureController::new(surface, GestureOptions::default());
///
/// controller.pointer_down(PointerSample::new(500.0, 500.0), MouseButton::Primary);
/// assert!(!controller.is_playing());
///
/// controller.pointer_move(PointerSample::new(520.0, 500.0));
/// assert!((controller.current_time() - 52.0).abs() < 1e-6);
///
/// controller.pointer_up();
/// assert!(controller.is_playing());
/// ```
#[derive(Debug)]
pub struct GestureController<S, C = MonotonicClock> {
    surface: S,
    clock: C,
    options: GestureOptions,
    /// Baseline for mouse deltas.
    last_mouse: PointerSample,
    /// Baseline for touch deltas. Reset to the origin when a touch ends.
    last_touch: PointerSample,
    session: Option<DragSession>,
    muted: bool,
}

impl<S: MediaSurface> GestureController<S> {
    /// Creates a controller timing taps with the system's monotonic clock.
    pub fn new(surface: S, options: GestureOptions) -> Self {
        Self::with_clock(surface, MonotonicClock, options)
    }
}

impl<S: MediaSurface, C: Clock> GestureController<S, C> {
    pub fn with_clock(surface: S, clock: C, options: GestureOptions) -> Self {
        Self {
            surface,
            clock,
            options,
            last_mouse: PointerSample::ORIGIN,
            last_touch: PointerSample::ORIGIN,
            session: None,
            muted: options.start_muted,
        }
    }

    /// Dispatches one input event to its handler.
    pub fn handle(&mut self, event: &InputEvent) -> Effect {
        match event {
            InputEvent::MouseDown { x, y, button } => {
                self.pointer_down(PointerSample::new(*x, *y), *button)
            }
            InputEvent::MouseMove { x, y } => self.pointer_move(PointerSample::new(*x, *y)),
            InputEvent::MouseUp => self.pointer_up(),
            InputEvent::MouseLeave => self.pointer_leave(),
            InputEvent::TouchStart { touches } => self.touch_start(touches),
            InputEvent::TouchMove { touches } => self.touch_move(touches),
            InputEvent::TouchEnd => self.touch_end(),
            InputEvent::Activate { x } => self.activate(*x),
        }
    }

    // =========================================================================
    // Mouse
    // =========================================================================

    /// Opens a drag session at `position`.
    ///
    /// A primary press also pauses the surface until the matching release
    /// (hold-to-pause), whether or not a drag follows.
    pub fn pointer_down(&mut self, position: PointerSample, button: MouseButton) -> Effect {
        self.last_mouse = position;
        self.open_session(button.is_primary())
    }

    /// Interprets a mouse move. Ignored unless a drag session is open.
    pub fn pointer_move(&mut self, position: PointerSample) -> Effect {
        if self.session.is_none() {
            return Effect::None;
        }
        let (delta_x, delta_y) = position.delta_from(self.last_mouse);
        self.last_mouse = position;
        self.interpret(delta_x, delta_y)
    }

    /// Ends the drag session; a short press without a drag toggles mute.
    pub fn pointer_up(&mut self) -> Effect {
        self.close_session(Release::Up)
    }

    /// Ends the drag session like [`pointer_up`](Self::pointer_up), but never taps.
    pub fn pointer_leave(&mut self) -> Effect {
        self.close_session(Release::Leave)
    }

    // =========================================================================
    // Touch
    // =========================================================================

    /// Records the first touch point as the touch baseline.
    ///
    /// With [`GestureOptions::symmetric_touch`] this also opens a held session
    /// exactly like a primary press.
    pub fn touch_start(&mut self, touches: &[PointerSample]) -> Effect {
        let Some(&first) = touches.first() else {
            log::warn!("Ignoring touch-start without touch points");
            return Effect::None;
        };
        self.last_touch = first;
        if self.options.symmetric_touch {
            self.open_session(true)
        } else {
            Effect::None
        }
    }

    /// Interprets a touch move.
    ///
    /// By default moves are interpreted even without a preceding touch-start;
    /// with [`GestureOptions::symmetric_touch`] they need an open session.
    pub fn touch_move(&mut self, touches: &[PointerSample]) -> Effect {
        let Some(&first) = touches.first() else {
            log::warn!("Ignoring touch-move without touch points");
            return Effect::None;
        };
        if self.options.symmetric_touch && self.session.is_none() {
            return Effect::None;
        }
        let (delta_x, delta_y) = first.delta_from(self.last_touch);
        self.last_touch = first;
        self.interpret(delta_x, delta_y)
    }

    /// Resets the touch baseline to the origin.
    ///
    /// With [`GestureOptions::symmetric_touch`] this also releases the session
    /// like [`pointer_up`](Self::pointer_up).
    pub fn touch_end(&mut self) -> Effect {
        self.last_touch = PointerSample::ORIGIN;
        if self.options.symmetric_touch {
            self.close_session(Release::Up)
        } else {
            Effect::None
        }
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Jumps by the seek step: forward right of the surface midpoint, backward
    /// at or left of it. The target is clamped to `[0, duration]`.
    ///
    /// A forward jump needs a duration to clamp against and is skipped while
    /// it is NaN. Live streams report `+inf` and jump freely.
    pub fn activate(&mut self, x: f32) -> Effect {
        let direction = self.surface.geometry().activation_direction(x);
        let current = self.surface.current_time();
        let duration = seek_upper_bound(self.surface.duration());

        let target = match (direction, duration) {
            (SeekDirection::Forward, Some(duration)) => {
                (current + SEEK_STEP_SECS).clamp(0.0, duration)
            }
            (SeekDirection::Forward, None) => {
                log::debug!("Forward jump skipped: duration unknown");
                return Effect::None;
            }
            (SeekDirection::Backward, Some(duration)) => {
                (current - SEEK_STEP_SECS).clamp(0.0, duration)
            }
            (SeekDirection::Backward, None) => (current - SEEK_STEP_SECS).max(0.0),
        };

        self.surface.set_current_time(target);
        let position = self.surface.current_time();
        log::debug!("Jumped {direction:?} to {position:.2}s");
        Effect::Jumped {
            direction,
            position,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.surface.volume()
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.surface.current_time()
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.surface.duration()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.surface.paused()
    }

    /// The controller's mute shadow, which may differ from the surface's flag
    /// if something else wrote to the surface.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> GestureOptions {
        self.options
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consumes the controller and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    // =========================================================================
    // State machine
    // =========================================================================

    fn open_session(&mut self, hold: bool) -> Effect {
        // A press while already pressed must not lose a pending resume.
        let carried_hold = self.session.is_some_and(|s| s.held_for_pause);
        let mut session = DragSession::start(self.clock.now());

        let effect = if hold {
            self.surface.pause();
            session.held_for_pause = true;
            log::debug!("Hold started: playback paused");
            Effect::HoldStarted
        } else {
            session.held_for_pause = carried_hold;
            Effect::Pressed
        };

        self.session = Some(session);
        effect
    }

    /// Attributes one sample's movement to volume or progress.
    fn interpret(&mut self, delta_x: f32, delta_y: f32) -> Effect {
        if delta_y.abs() > VOLUME_DELTA_THRESHOLD {
            if let Some(session) = self.session.as_mut() {
                session.volume_intent = true;
            }
            return self.adjust_volume(delta_y);
        }

        if delta_x.abs() > PROGRESS_DELTA_THRESHOLD {
            if let Some(session) = self.session.as_mut() {
                session.progress_intent = true;
            }
            return self.scrub(delta_x);
        }

        log::trace!("Ignoring jitter ({delta_x:.1}, {delta_y:.1})");
        Effect::None
    }

    /// Positive `delta_y` moves down the screen and lowers the volume.
    fn adjust_volume(&mut self, delta_y: f32) -> Effect {
        let current = Volume::new(self.surface.volume());
        let raising = delta_y <= 0.0;
        if (raising && current.is_max()) || (!raising && current.is_min()) {
            log::trace!("Volume already at {:.2}", current.value());
        }

        let volume = if raising {
            self.muted = false;
            self.surface.set_muted(false);
            current.increase()
        } else {
            current.decrease()
        };
        self.surface.set_volume(volume.value());

        log::debug!("Volume {:.2} -> {:.2}", current.value(), volume.value());
        Effect::VolumeAdjusted {
            volume,
            unmuted: raising,
        }
    }

    /// Moves the position by the dragged fraction of the surface width.
    fn scrub(&mut self, delta_x: f32) -> Effect {
        let Some(width) = self.surface.geometry().usable_width() else {
            log::debug!("Scrub skipped: surface has no usable width");
            return Effect::None;
        };
        let Some(duration) = known_duration(self.surface.duration()) else {
            log::debug!("Scrub skipped: duration unknown");
            return Effect::None;
        };

        let percent_change = f64::from(delta_x) / f64::from(width);
        let delta_secs = percent_change * duration;
        let mut target = self.surface.current_time() + delta_secs;
        if self.options.clamp_drag_seek {
            target = target.clamp(0.0, duration);
        }
        self.surface.set_current_time(target);

        let position = self.surface.current_time();
        log::debug!("Scrubbed {delta_secs:+.2}s to {position:.2}s");
        Effect::Scrubbed {
            delta_secs,
            position,
        }
    }

    fn close_session(&mut self, release: Release) -> Effect {
        let Some(session) = self.session.take() else {
            log::trace!("Ignoring {release:?} without an open session");
            return Effect::None;
        };

        let resumed = session.held_for_pause;
        if resumed {
            self.surface.play();
            log::debug!("Hold ended: playback resumed");
        }

        let tap = match release {
            Release::Leave => TapOutcome::Left,
            Release::Up if session.elapsed(self.clock.now()) >= TAP_DURATION_THRESHOLD => {
                TapOutcome::NotATap
            }
            Release::Up if session.has_intent() => TapOutcome::FastDrag,
            Release::Up => {
                self.muted = !self.muted;
                self.surface.set_muted(self.muted);
                log::debug!("Tap: muted = {}", self.muted);
                TapOutcome::MuteToggled { muted: self.muted }
            }
        };

        Effect::Released { resumed, tap }
    }
}
