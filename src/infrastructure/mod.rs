// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clock`]: [`MonotonicClock`] for hosts, [`ManualClock`] for replays and tests
//! - [`memory_surface`]: [`MemorySurface`], an in-memory [`MediaSurface`]
//!
//! [`MediaSurface`]: crate::application::port::MediaSurface

pub mod clock;
pub mod memory_surface;

pub use clock::{ManualClock, MonotonicClock};
pub use memory_surface::MemorySurface;
