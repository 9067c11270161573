// SPDX-License-Identifier: MPL-2.0
//! Drag session state.

use std::time::{Duration, Instant};

/// State of one press, from pointer-down to its release.
///
/// A session exists exactly while a pointer is down; the controller stores it
/// as `Option<DragSession>` and every field starts cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub(crate) started_at: Instant,
    pub(crate) volume_intent: bool,
    pub(crate) progress_intent: bool,
    pub(crate) held_for_pause: bool,
}

impl DragSession {
    pub(crate) fn start(now: Instant) -> Self {
        Self {
            started_at: now,
            volume_intent: false,
            progress_intent: false,
            held_for_pause: false,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// A sample of this session was attributed to volume.
    #[must_use]
    pub fn volume_intent(&self) -> bool {
        self.volume_intent
    }

    /// A sample of this session was attributed to progress.
    #[must_use]
    pub fn progress_intent(&self) -> bool {
        self.progress_intent
    }

    /// The press paused playback and the release must resume it.
    #[must_use]
    pub fn held_for_pause(&self) -> bool {
        self.held_for_pause
    }

    /// Returns true if the session turned into a drag.
    #[must_use]
    pub fn has_intent(&self) -> bool {
        self.volume_intent || self.progress_intent
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}
