// SPDX-License-Identifier: MPL-2.0
//! Host-neutral input events.

use crate::domain::gesture::{MouseButton, PointerSample};
use serde::{Deserialize, Serialize};

/// One discrete input event, in the surface's coordinate space.
///
/// Touch variants carry the full touch-point list; only the first point is
/// used and an empty list is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InputEvent {
    MouseDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: MouseButton,
    },
    MouseMove {
        x: f32,
        y: f32,
    },
    MouseUp,
    MouseLeave,
    TouchStart {
        touches: Vec<PointerSample>,
    },
    TouchMove {
        touches: Vec<PointerSample>,
    },
    TouchEnd,
    /// Double-click or double-tap at horizontal position `x`.
    Activate {
        x: f32,
    },
}

impl InputEvent {
    /// Single-point touch start.
    #[must_use]
    pub fn touch_start(x: f32, y: f32) -> Self {
        Self::TouchStart {
            touches: vec![PointerSample::new(x, y)],
        }
    }

    /// Single-point touch move.
    #[must_use]
    pub fn touch_move(x: f32, y: f32) -> Self {
        Self::TouchMove {
            touches: vec![PointerSample::new(x, y)],
        }
    }

    /// Primary-button press.
    #[must_use]
    pub fn primary_down(x: f32, y: f32) -> Self {
        Self::MouseDown {
            x,
            y,
            button: MouseButton::Primary,
        }
    }
}
