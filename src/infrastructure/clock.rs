// SPDX-License-Identifier: MPL-2.0
//! Clock adapters.

use crate::application::port::Clock;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Wall-clock time via [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Readings are `origin + elapsed`; `elapsed` can be advanced or set through a
/// shared reference so a controller holding the clock can still be driven.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Moves the clock to `elapsed` past its origin. Earlier values are ignored.
    pub fn set_elapsed(&self, elapsed: Duration) {
        if elapsed >= self.elapsed.get() {
            self.elapsed.set(elapsed);
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
