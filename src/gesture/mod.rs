// SPDX-License-Identifier: MPL-2.0
//! Gesture disambiguation for media surfaces.
//!
//! A [`GestureController`] turns pointer and touch samples into exactly one of
//! three intents: scrub the timeline, adjust the volume, or toggle mute/pause.
//!
//! # Gestures
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | Primary press and hold | Pause until release |
//! | Vertical drag (> 5 units per sample) | Volume down (downward) or up and unmute (upward) |
//! | Horizontal drag (> 1 unit per sample) | Scrub by the dragged fraction of the width |
//! | Press and release under 200 ms, no drag | Toggle mute |
//! | Double activation | Jump 10 s forward (right half) or back (left half) |
//!
//! Deltas are always measured against the previous sample, never against the
//! drag origin. Volume is checked before progress, so a sample that crosses
//! both thresholds only ever changes the volume.

mod controller;
mod options;
mod session;

pub use controller::GestureController;
pub use options::GestureOptions;
pub use session::DragSession;
