// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`surface`]: The playable media surface the gestures drive
//! - [`clock`]: Monotonic time source used to tell taps from drags
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced types, no player handles)
//! - Gesture handling is infallible, so port methods do not return `Result`
//! - Everything runs on the event-handling thread; no `Sync` bound is required

pub mod clock;
pub mod surface;

pub use clock::Clock;
pub use surface::MediaSurface;
