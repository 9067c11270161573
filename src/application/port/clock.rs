// SPDX-License-Identifier: MPL-2.0
//! Time source port.

use std::time::Instant;

/// Monotonic time source.
///
/// Tap detection compares two readings of this clock, so implementations must
/// never go backwards. Calendar time is not acceptable here.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
