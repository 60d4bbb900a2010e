//! Satisfaction value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A running estimate of user contentment, between 0.0 and 1.0 inclusive.
///
/// Tactics adjust satisfaction in response to pushback or resolution,
/// and the utility landscape may consult it to prefer tactics when the
/// user seems receptive or frustrated.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Satisfaction(f64);

impl Satisfaction {
    /// Fully dissatisfied.
    pub const FLOOR: Self = Self(0.0);

    /// Fully satisfied.
    pub const CEILING: Self = Self(1.0);

    /// Creates a new Satisfaction, clamping to the valid range.
    /// Non-finite inputs clamp to the floor.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::FLOOR
        }
    }

    /// Creates a Satisfaction, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "satisfaction",
                0.0,
                1.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns a new Satisfaction raised by `delta`, capped at 1.0.
    pub fn raised_by(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns a new Satisfaction lowered by `delta`, floored at 0.0.
    pub fn lowered_by(self, delta: f64) -> Self {
        Self::new(self.0 - delta)
    }
}

impl Default for Satisfaction {
    /// The starting estimate for a fresh conversation.
    fn default() -> Self {
        Self(0.7)
    }
}

impl fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
