// SPDX-License-Identifier: MPL-2.0
//! In-memory media surface.
//!
//! Behaves like a browser media element as far as the gesture controller can
//! observe: seeks are clamped to `[0, duration]`, NaN seeks are dropped and
//! volume writes are clamped. Used by the trace replayer and by tests.

use crate::application::port::MediaSurface;
use crate::domain::media::{seek_upper_bound, SurfaceGeometry, Volume};

#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    geometry: SurfaceGeometry,
    duration: f64,
    current_time: f64,
    volume: f32,
    muted: bool,
    paused: bool,
    play_count: u32,
    pause_count: u32,
}

impl MemorySurface {
    /// Creates a playing, unmuted surface at position 0 and full volume.
    #[must_use]
    pub fn new(geometry: SurfaceGeometry, duration: f64) -> Self {
        Self {
            geometry,
            duration,
            current_time: 0.0,
            volume: Volume::default().value(),
            muted: false,
            paused: false,
            play_count: 0,
            pause_count: 0,
        }
    }

    #[must_use]
    pub fn with_current_time(mut self, secs: f64) -> Self {
        self.set_current_time(secs);
        self
    }

    #[must_use]
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.set_volume(volume);
        self
    }

    #[must_use]
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    #[must_use]
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Number of `play()` calls received.
    #[must_use]
    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Number of `pause()` calls received.
    #[must_use]
    pub fn pause_count(&self) -> u32 {
        self.pause_count
    }

    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = geometry;
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }
}

impl MediaSurface for MemorySurface {
    fn play(&mut self) {
        self.play_count += 1;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.pause_count += 1;
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        if secs.is_nan() {
            return;
        }
        let upper = seek_upper_bound(self.duration).unwrap_or(f64::INFINITY);
        self.current_time = secs.clamp(0.0, upper);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = Volume::new(volume).value();
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }
}
