// SPDX-License-Identifier: MPL-2.0
//! Pointer positions and buttons.

use serde::{Deserialize, Serialize};

/// Last observed pointer position, in the surface's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    /// The baseline touch input falls back to once a touch ends.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Movement from `previous` to `self`.
    #[must_use]
    pub fn delta_from(self, previous: Self) -> (f32, f32) {
        (self.x - previous.x, self.y - previous.y)
    }
}

/// Mouse button that initiated a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other,
}

impl MouseButton {
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_measured_from_previous_sample() {
        let previous = PointerSample::new(500.0, 500.0);
        let current = PointerSample::new(520.0, 490.0);
        assert_eq!(current.delta_from(previous), (20.0, -10.0));
    }

    #[test]
    fn only_primary_button_is_primary() {
        assert!(MouseButton::Primary.is_primary());
        assert!(!MouseButton::Secondary.is_primary());
        assert!(!MouseButton::Middle.is_primary());
        assert!(!MouseButton::Other.is_primary());
    }
}
