// SPDX-License-Identifier: MPL-2.0
//! `iced_scrub` turns pointer and touch drags on a media surface into
//! playback intents.
//!
//! A [`gesture::GestureController`] sits between an input source and a
//! [`application::port::MediaSurface`]. Each drag sample is attributed to
//! exactly one intent (volume or seek), a primary press holds playback paused
//! until release, a short tap toggles mute, and a double activation jumps ten
//! seconds. The [`input::IcedInput`] adapter feeds it from `iced` events.

#![doc(html_root_url = "https://docs.rs/iced_scrub/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod infrastructure;
pub mod input;
pub mod trace;

#[cfg(test)]
pub(crate) mod test_utils;
