// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Pointer samples flow in, effects flow out. The state machine that connects
//! them lives in [`crate::gesture`].

pub mod effect;
pub mod sample;

pub use effect::{Effect, TapOutcome};
pub use sample::{MouseButton, PointerSample};
