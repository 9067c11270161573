// SPDX-License-Identifier: MPL-2.0
//! Iced input adapter.
//!
//! Translates `iced_core` mouse and touch events into [`InputEvent`]s for a
//! surface laid out at a known [`Rectangle`]. Coordinates are passed through in
//! window space; the surface geometry handed to the controller must use the
//! same space (see [`IcedInput::geometry`]).

use super::InputEvent;
use crate::config::DOUBLE_ACTIVATION_THRESHOLD;
use crate::domain::gesture::{MouseButton, PointerSample};
use crate::domain::media::SurfaceGeometry;
use iced_core::{mouse, touch, Point, Rectangle};
use std::time::Instant;

/// Per-surface translation state.
#[derive(Debug, Clone)]
pub struct IcedInput {
    bounds: Rectangle,
    /// Last cursor position; button events carry none.
    cursor_position: Option<Point>,
    /// Whether the cursor is currently over the surface.
    hovered: bool,
    /// The finger being followed; other fingers are ignored.
    finger: Option<touch::Finger>,
    /// Last primary click timestamp for double-click detection.
    last_click: Option<Instant>,
    /// Last finger press timestamp for double-tap detection.
    last_tap: Option<Instant>,
}

impl IcedInput {
    #[must_use]
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            cursor_position: None,
            hovered: false,
            finger: None,
            last_click: None,
            last_tap: None,
        }
    }

    /// Updates the surface bounds after a layout change.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Surface geometry in the coordinate space of the emitted events.
    #[must_use]
    pub fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry::new(self.bounds.x, self.bounds.width)
    }

    /// Translates a mouse event. Returns the events to dispatch, in order.
    ///
    /// A primary press completing a double-click yields the press followed by
    /// an activation.
    pub fn mouse(&mut self, event: &mouse::Event) -> Vec<InputEvent> {
        self.mouse_at(event, Instant::now())
    }

    fn mouse_at(&mut self, event: &mouse::Event, now: Instant) -> Vec<InputEvent> {
        match event {
            &mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                let inside = self.bounds.contains(position);
                let was_hovered = std::mem::replace(&mut self.hovered, inside);

                if inside {
                    vec![InputEvent::MouseMove {
                        x: position.x,
                        y: position.y,
                    }]
                } else if was_hovered {
                    vec![InputEvent::MouseLeave]
                } else {
                    Vec::new()
                }
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                if std::mem::take(&mut self.hovered) {
                    vec![InputEvent::MouseLeave]
                } else {
                    Vec::new()
                }
            }
            &mouse::Event::ButtonPressed(button) => {
                let Some(position) = self.cursor_position.filter(|_| self.hovered) else {
                    return Vec::new();
                };
                let button = map_button(button);
                let mut events = vec![InputEvent::MouseDown {
                    x: position.x,
                    y: position.y,
                    button,
                }];
                if button.is_primary() && register_activation(&mut self.last_click, now) {
                    events.push(InputEvent::Activate { x: position.x });
                }
                events
            }
            mouse::Event::ButtonReleased(_) if self.hovered => vec![InputEvent::MouseUp],
            _ => Vec::new(),
        }
    }

    /// Translates a touch event, following only the first finger down.
    ///
    /// A press completing a double-tap yields the touch start followed by an
    /// activation.
    pub fn touch(&mut self, event: &touch::Event) -> Vec<InputEvent> {
        self.touch_at(event, Instant::now())
    }

    fn touch_at(&mut self, event: &touch::Event, now: Instant) -> Vec<InputEvent> {
        match event {
            &touch::Event::FingerPressed { id, position } => {
                if self.finger.is_some() || !self.bounds.contains(position) {
                    return Vec::new();
                }
                self.finger = Some(id);
                let mut events = vec![InputEvent::touch_start(position.x, position.y)];
                if register_activation(&mut self.last_tap, now) {
                    events.push(InputEvent::Activate { x: position.x });
                }
                events
            }
            &touch::Event::FingerMoved { id, position } if self.finger == Some(id) => {
                vec![InputEvent::TouchMove {
                    touches: vec![PointerSample::new(position.x, position.y)],
                }]
            }
            &touch::Event::FingerLifted { id, .. } | &touch::Event::FingerLost { id, .. }
                if self.finger == Some(id) =>
            {
                self.finger = None;
                vec![InputEvent::TouchEnd]
            }
            _ => Vec::new(),
        }
    }
}

/// Returns true if a press at `now` completes a double activation.
fn register_activation(last: &mut Option<Instant>, now: Instant) -> bool {
    let is_double = last.is_some_and(|t| now.duration_since(t) < DOUBLE_ACTIVATION_THRESHOLD);

    // Reset after a double activation so a third press starts over.
    *last = if is_double { None } else { Some(now) };
    is_double
}

fn map_button(button: mouse::Button) -> MouseButton {
    match button {
        mouse::Button::Left => MouseButton::Primary,
        mouse::Button::Right => MouseButton::Secondary,
        mouse::Button::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}
