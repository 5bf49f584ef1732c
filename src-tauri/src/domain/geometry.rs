//! Window Geometry
//!
//! Position/size values and the rules for accepting resize requests.

use serde::{Deserialize, Serialize};

/// Screen position of the window's outer top-left corner (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a drag delta
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Outer window size (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    pub fn with(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Width => Self { width: value, ..self },
            Axis::Height => Self { height: value, ..self },
        }
    }
}

/// Resize axis; each one is requested independently by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

/// Acceptance rules for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLimits {
    pub min: u32,
    pub max: u32,
    /// Changes of this many pixels or fewer are ignored
    pub threshold: u32,
    /// Requests above this are treated as garbage, not clamped
    pub max_accepted: u32,
}

/// Outcome of a resize request on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// Apply the new value
    Apply(u32),
    /// Within the jitter threshold of the current value
    Unchanged,
    /// Not a usable dimension; the prior size is kept
    Rejected,
}

/// Decide what to do with a requested dimension.
///
/// Non-finite, non-positive and absurdly large values are rejected.
/// Accepted values are rounded and clamped into `[min, max]`, then compared
/// with the current value against the threshold.
pub fn resolve_dimension(current: u32, requested: f64, limits: &AxisLimits) -> ResizeDecision {
    if !requested.is_finite() {
        return ResizeDecision::Rejected;
    }
    let rounded = requested.round();
    if rounded <= 0.0 || rounded > f64::from(limits.max_accepted) {
        return ResizeDecision::Rejected;
    }

    let target = (rounded as u32).clamp(limits.min, limits.max.max(limits.min));
    if current.abs_diff(target) <= limits.threshold {
        ResizeDecision::Unchanged
    } else {
        ResizeDecision::Apply(target)
    }
}
