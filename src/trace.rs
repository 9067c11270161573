// SPDX-License-Identifier: MPL-2.0
//! Gesture trace files and their replay.
//!
//! A trace describes a surface and a timed sequence of input events. Replaying
//! it drives a [`GestureController`] over a [`MemorySurface`] with a
//! [`ManualClock`] set to each event's timestamp, so tap timing is exact.
//!
//! # Format
//!
//! ```toml
//! [surface]
//! width = 1000.0
//! duration = 100.0
//! current_time = 50.0
//!
//! [[event]]
//! at_ms = 0
//! event = { kind = "mouse-down", x = 500.0, y = 500.0 }
//!
//! [[event]]
//! at_ms = 40
//! event = { kind = "mouse-move", x = 520.0, y = 500.0 }
//!
//! [[event]]
//! at_ms = 90
//! event = { kind = "mouse-up" }
//! ```

use crate::application::port::MediaSurface;
use crate::domain::gesture::Effect;
use crate::domain::media::SurfaceGeometry;
use crate::error::{Error, Result};
use crate::gesture::{GestureController, GestureOptions};
use crate::infrastructure::{ManualClock, MemorySurface};
use crate::input::InputEvent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Initial state of the replayed surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    #[serde(default)]
    pub left: f32,
    pub width: f32,
    /// Omitted means unknown (NaN).
    #[serde(default = "unknown_duration")]
    pub duration: f64,
    #[serde(default)]
    pub current_time: f64,
    #[serde(default = "full_volume")]
    pub volume: f32,
    #[serde(default)]
    pub muted: bool,
    #[serde(default)]
    pub paused: bool,
}

fn unknown_duration() -> f64 {
    f64::NAN
}

fn full_volume() -> f32 {
    1.0
}

impl SurfaceSpec {
    #[must_use]
    pub fn build(&self) -> MemorySurface {
        MemorySurface::new(SurfaceGeometry::new(self.left, self.width), self.duration)
            .with_current_time(self.current_time)
            .with_volume(self.volume)
            .with_muted(self.muted)
            .with_paused(self.paused)
    }
}

/// An input event and when it happened, relative to the start of the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: InputEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub surface: SurfaceSpec,
    #[serde(default, rename = "event")]
    pub events: Vec<TimedEvent>,
}

impl Trace {
    /// Parses a trace and checks that timestamps never decrease.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let trace: Trace = toml::from_str(content).map_err(|e| Error::Trace(e.to_string()))?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        for (index, pair) in self.events.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(Error::Trace(format!(
                    "event {} at {} ms is earlier than the event before it ({} ms)",
                    index + 1,
                    pair[1].at_ms,
                    pair[0].at_ms
                )));
            }
        }
        Ok(())
    }

    /// Replays every event and reports what each one did.
    #[must_use]
    pub fn replay(&self, options: GestureOptions) -> ReplayReport {
        let mut controller =
            GestureController::with_clock(self.surface.build(), ManualClock::new(), options);

        let steps = self
            .events
            .iter()
            .map(|timed| {
                controller
                    .clock()
                    .set_elapsed(Duration::from_millis(timed.at_ms));
                let effect = controller.handle(&timed.event);
                log::trace!("{} ms: {:?} -> {:?}", timed.at_ms, timed.event, effect);
                ReplayStep {
                    at_ms: timed.at_ms,
                    event: timed.event.clone(),
                    effect,
                }
            })
            .collect();

        ReplayReport {
            steps,
            muted: controller.is_muted(),
            surface: controller.into_surface(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub event: InputEvent,
    pub effect: Effect,
}

/// Outcome of a replay: one step per event plus the final state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub surface: MemorySurface,
    /// The controller's mute shadow at the end of the trace.
    pub muted: bool,
}

impl ReplayReport {
    /// Effects that changed something, in order.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.steps.iter().map(|step| &step.effect).filter(|e| e.is_some())
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{:>6} ms  {:?}", step.at_ms, step.event)?;
            if step.effect.is_some() {
                writeln!(f, "          -> {:?}", step.effect)?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "position {:.2}s / {:.2}s",
            self.surface.current_time(),
            self.surface.duration()
        )?;
        writeln!(f, "volume   {:.2}", self.surface.volume())?;
        writeln!(f, "playing  {}", !self.surface.paused())?;
        write!(f, "muted    {}", self.muted)
    }
}
