// SPDX-License-Identifier: MPL-2.0
//! What a single input event did to the surface.

use crate::domain::media::{SeekDirection, Volume};

/// Effects produced by the gesture controller.
///
/// Exactly one effect is returned per handled event. Hosts use it to refresh
/// overlays (volume indicator, seek preview); nothing in the controller
/// depends on the caller acting on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing happened (jitter, ignored event, degenerate surface).
    None,
    /// A press opened a drag session without pausing.
    Pressed,
    /// A primary press opened a drag session and paused the surface.
    HoldStarted,
    /// A vertical sample changed the volume.
    VolumeAdjusted {
        volume: Volume,
        /// The sample raised the volume and cleared mute on the way.
        unmuted: bool,
    },
    /// A horizontal sample moved the playback position.
    Scrubbed {
        delta_secs: f64,
        /// Position as reported by the surface after the write.
        position: f64,
    },
    /// A double activation jumped by the seek step.
    Jumped {
        direction: SeekDirection,
        position: f64,
    },
    /// A drag session closed.
    Released {
        /// Playback resumed because the press had paused it.
        resumed: bool,
        tap: TapOutcome,
    },
}

/// How a release was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The press lasted at least the tap threshold.
    NotATap,
    /// Short press, but the session committed to volume or progress.
    FastDrag,
    /// Short press with no intent: the mute shadow flipped.
    MuteToggled { muted: bool },
    /// The pointer left the surface; leaving never taps.
    Left,
}

impl Effect {
    /// Returns true if the event changed anything.
    #[must_use]
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }
}
