// SPDX-License-Identifier: MPL-2.0
//! Input delivered to the gesture controller.
//!
//! [`InputEvent`] is the host-neutral event vocabulary. The [`iced`] adapter
//! produces it from `iced_core` mouse and touch events; other hosts can build
//! it directly.

mod event;
pub mod iced;

pub use event::InputEvent;
pub use iced::IcedInput;
