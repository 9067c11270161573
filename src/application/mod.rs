// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the gesture controller depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The gesture controller only ever talks to the ports
//!
//! # Example
//!
//! ```ignore
//! use iced_scrub::application::port::MediaSurface;
//!
//! // A host wraps its player and hands it to the controller
//! struct PlayerSurface { /* ... */ }
//! impl MediaSurface for PlayerSurface { /* ... */ }
//! ```

pub mod port;
