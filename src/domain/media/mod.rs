// SPDX-License-Identifier: MPL-2.0
//! Media surface value objects.
//!
//! These types describe what the gesture controller reads from and writes to
//! a playable surface, independent of how the surface is implemented.

pub mod newtypes;

pub use newtypes::{
    known_duration, seek_upper_bound, volume_bounds, SeekDirection, SurfaceGeometry, Volume,
};
