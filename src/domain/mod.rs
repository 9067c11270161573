// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gesture and playback types.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends on nothing beyond `std` and `serde` derives, to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gesture`]: Gesture types ([`PointerSample`](gesture::PointerSample),
//!   [`Effect`](gesture::Effect), [`TapOutcome`](gesture::TapOutcome))
//! - [`media`]: Media surface value objects ([`Volume`](media::Volume),
//!   [`SurfaceGeometry`](media::SurfaceGeometry))

pub mod gesture;
pub mod media;
