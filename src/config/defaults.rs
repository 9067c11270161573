// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all gesture constants.
//!
//! This module serves as the single source of truth for the thresholds and
//! step sizes used by the gesture controller. They are fixed at compile time.
//!
//! # Categories
//!
//! - **Drag**: Per-sample delta thresholds that commit a drag to an intent
//! - **Tap**: Press duration under which a release counts as a tap
//! - **Volume**: Volume bounds and drag step
//! - **Seek**: Double-activation jump size

use std::time::Duration;

// ==========================================================================
// Drag Thresholds
// ==========================================================================

/// Vertical movement (in pointer units) a single sample must exceed to adjust volume.
pub const VOLUME_DELTA_THRESHOLD: f32 = 5.0;

/// Horizontal movement (in pointer units) a single sample must exceed to scrub.
pub const PROGRESS_DELTA_THRESHOLD: f32 = 1.0;

// ==========================================================================
// Tap / Activation Timing
// ==========================================================================

/// A press released sooner than this is a tap (or a fast drag).
pub const TAP_DURATION_THRESHOLD: Duration = Duration::from_millis(200);

/// Two primary clicks closer than this form a double-click activation.
pub const DOUBLE_ACTIVATION_THRESHOLD: Duration = Duration::from_millis(350);

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment per committed vertical drag sample (5%).
pub const VOLUME_STEP: f32 = 0.05;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Jump size for double-activation seeks (in seconds).
pub const SEEK_STEP_SECS: f64 = 10.0;

/// Whether the controller starts with its mute shadow set.
pub const DEFAULT_START_MUTED: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(VOLUME_DELTA_THRESHOLD > 0.0);
    assert!(PROGRESS_DELTA_THRESHOLD > 0.0);
    assert!(VOLUME_DELTA_THRESHOLD > PROGRESS_DELTA_THRESHOLD);

    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(VOLUME_STEP > 0.0);
    assert!(VOLUME_STEP < MAX_VOLUME - MIN_VOLUME);

    assert!(SEEK_STEP_SECS > 0.0);
};
