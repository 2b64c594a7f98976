//! Wheel input → choreography commands.
//!
//! The translator is pure: it reads a raw `delta_y` and the active [`ScrollPolicy`] and tells
//! the choreographer what to do. It never touches a pose or a camera.

use crate::constants::ACCUMULATE_STEP;
use std::fmt;
use std::str::FromStr;

/// How wheel events move the camera between the two poses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPolicy {
    /// Each event nudges the camera a small fixed step along the path.
    Accumulate,
    /// Each event picks an endpoint; the frame loop glides there.
    #[default]
    TargetDirection,
}

impl ScrollPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ScrollPolicy::Accumulate => "accumulate",
            ScrollPolicy::TargetDirection => "target",
        }
    }
}

impl fmt::Display for ScrollPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scroll policy `{0}` (expected `accumulate` or `target`)")]
pub struct ParsePolicyError(pub String);

impl FromStr for ScrollPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accumulate" | "additive" => Ok(ScrollPolicy::Accumulate),
            "target" | "target-direction" | "lerp" => Ok(ScrollPolicy::TargetDirection),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

/// Which endpoint a transition is heading for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Idle,
    Forward,
    Backward,
}

impl Direction {
    /// Path value of the endpoint this direction heads for, if any.
    #[inline]
    pub fn target_path(&self) -> Option<f32> {
        match self {
            Direction::Idle => None,
            Direction::Forward => Some(1.0),
            Direction::Backward => Some(0.0),
        }
    }
}

/// What a single wheel event asks the choreographer to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollCommand {
    /// Zero-magnitude or missing delta.
    Ignore,
    /// Move the path value by this signed amount (accumulate policy).
    Nudge(f32),
    /// Restart a transition in this direction (target-direction policy).
    Retarget(Direction),
}

/// Sign of a raw wheel delta: +1, -1 or 0. Missing and NaN deltas are 0.
#[inline]
pub fn wheel_sign(delta_y: Option<f32>) -> f32 {
    match delta_y {
        Some(d) if d > 0.0 => 1.0,
        Some(d) if d < 0.0 => -1.0,
        _ => 0.0,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollInputTranslator {
    pub policy: ScrollPolicy,
    /// Path moved per event under [`ScrollPolicy::Accumulate`].
    pub step: f32,
}

impl Default for ScrollInputTranslator {
    fn default() -> Self {
        Self::new(ScrollPolicy::default())
    }
}

impl ScrollInputTranslator {
    pub fn new(policy: ScrollPolicy) -> Self {
        Self {
            policy,
            step: ACCUMULATE_STEP,
        }
    }

    /// Set the accumulate step. Zero or non-finite steps fall back to [`ACCUMULATE_STEP`].
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = if step.is_finite() && step != 0.0 {
            step.abs()
        } else {
            ACCUMULATE_STEP
        };
        self
    }

    pub fn translate(&self, delta_y: Option<f32>) -> ScrollCommand {
        let sign = wheel_sign(delta_y);
        if sign == 0.0 {
            return ScrollCommand::Ignore;
        }
        match self.policy {
            ScrollPolicy::Accumulate => ScrollCommand::Nudge(sign * self.step),
            ScrollPolicy::TargetDirection => ScrollCommand::Retarget(if sign > 0.0 {
                Direction::Forward
            } else {
                Direction::Backward
            }),
        }
    }
}

