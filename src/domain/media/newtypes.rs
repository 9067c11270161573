// SPDX-License-Identifier: MPL-2.0
//! Media surface newtypes.
//!
//! This module provides type-safe wrappers for values exchanged with a media
//! surface, ensuring they are always within valid ranges.

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Volume adjustment per committed drag sample (5%).
    pub const STEP: f32 = 0.05;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// This newtype enforces validity at the type level, making it impossible
/// to write an out-of-range volume to a surface.
///
/// # Example
///
/// ```
/// use iced_scrub::domain::media::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// assert_eq!(Volume::new(-1.0).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// A NaN reading is treated as silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0 + volume_bounds::STEP)
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0 - volume_bounds::STEP)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::MAX)
    }
}

// =============================================================================
// SurfaceGeometry
// =============================================================================

/// Horizontal extent of the rendered surface, in pointer coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceGeometry {
    pub left: f32,
    pub width: f32,
}

impl SurfaceGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Width usable as a divisor: finite and strictly positive.
    #[must_use]
    pub fn usable_width(self) -> Option<f32> {
        (self.width.is_finite() && self.width > 0.0).then_some(self.width)
    }

    /// Which way an activation at `x` jumps.
    ///
    /// Strictly right of the midpoint seeks forward; the midpoint itself and
    /// everything left of it seeks backward.
    #[must_use]
    pub fn activation_direction(self, x: f32) -> SeekDirection {
        if x - self.left > self.width / 2.0 {
            SeekDirection::Forward
        } else {
            SeekDirection::Backward
        }
    }
}

/// Direction of a double-activation jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Forward,
    Backward,
}

// =============================================================================
// Duration
// =============================================================================

/// Returns the duration if the surface reports a usable one.
///
/// Surfaces report NaN before metadata is known; negative values are
/// treated the same way.
#[must_use]
pub fn known_duration(duration_secs: f64) -> Option<f64> {
    (duration_secs.is_finite() && duration_secs >= 0.0).then_some(duration_secs)
}

/// Returns the upper bound a seek may be clamped against.
///
/// Unlike [`known_duration`] this accepts `+inf`, which live streams report.
#[must_use]
pub fn seek_upper_bound(duration_secs: f64) -> Option<f64> {
    (duration_secs >= 0.0).then_some(duration_secs)
}
