// SPDX-License-Identifier: MPL-2.0
//! Behaviour switches for the gesture controller.

use crate::config::{Config, DEFAULT_START_MUTED};

/// Runtime options for a [`GestureController`](super::GestureController).
///
/// The defaults reproduce the reference behaviour: touch input has no hold,
/// no tap and no session gating, and drag scrubbing is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureOptions {
    /// Initial value of the controller's mute shadow.
    pub start_muted: bool,
    /// Treat touch-start/end like a primary press/release.
    pub symmetric_touch: bool,
    /// Clamp drag scrubbing to `[0, duration]`.
    pub clamp_drag_seek: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            start_muted: DEFAULT_START_MUTED,
            symmetric_touch: false,
            clamp_drag_seek: false,
        }
    }
}

impl From<&Config> for GestureOptions {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        let gesture = &config.gesture;
        Self {
            start_muted: gesture.start_muted.unwrap_or(defaults.start_muted),
            symmetric_touch: gesture.symmetric_touch.unwrap_or(defaults.symmetric_touch),
            clamp_drag_seek: gesture.clamp_drag_seek.unwrap_or(defaults.clamp_drag_seek),
        }
    }
}
