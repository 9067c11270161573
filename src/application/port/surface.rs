// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! This module defines the [`MediaSurface`] trait: the transport properties of
//! a playable surface (play state, position, volume, mute) plus its on-screen
//! geometry. Players, media elements and test doubles implement this trait.
//!
//! # Design Notes
//!
//! - Writes are plain property sets; the surface decides how to apply them
//! - `set_current_time` may receive values outside `[0, duration]` when drag
//!   seeking is left unclamped; surfaces are expected to tolerate that
//! - `duration` may be NaN while metadata is still loading

use crate::domain::media::SurfaceGeometry;

// =============================================================================
// MediaSurface Trait
// =============================================================================

/// Port for the playable surface a gesture controller drives.
///
/// # Example
///
/// ```
/// use iced_scrub::application::port::MediaSurface;
///
/// fn skip_intro(surface: &mut impl MediaSurface) {
///     if surface.current_time() < 30.0 {
///         surface.set_current_time(30.0);
///     }
/// }
/// ```
pub trait MediaSurface {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Returns true if playback is paused.
    fn paused(&self) -> bool;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position, in seconds.
    fn set_current_time(&mut self, secs: f64);

    /// Total duration in seconds. NaN when unknown.
    fn duration(&self) -> f64;

    /// Current volume (0.0 to 1.0).
    fn volume(&self) -> f32;

    /// Sets the volume (0.0 to 1.0).
    fn set_volume(&mut self, volume: f32);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Horizontal bounds of the rendered surface, in pointer coordinate units.
    fn geometry(&self) -> SurfaceGeometry;
}

impl<S: MediaSurface + ?Sized> MediaSurface for &mut S {
    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn paused(&self) -> bool {
        (**self).paused()
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, secs: f64) {
        (**self).set_current_time(secs);
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn volume(&self) -> f32 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn muted(&self) -> bool {
        (**self).muted()
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }

    fn geometry(&self) -> SurfaceGeometry {
        (**self).geometry()
    }
}
