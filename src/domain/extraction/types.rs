//! Structured records produced by reply extraction.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The user's stated objective, stripped of lead-in and qualifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Short summary of what the user wants to achieve.
    pub summary: String,
}

impl Intent {
    /// Evidence representation: the bare summary string.
    pub fn as_evidence(&self) -> Value {
        Value::String(self.summary.clone())
    }
}

/// Constraints the user is operating under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Constraints {
    /// Budget clause, verbatim from the reply.
    pub budget: Option<String>,
    /// Deadline clause, verbatim from the reply.
    pub deadline: Option<String>,
    /// Other hard requirements mentioned alongside.
    pub other: Vec<String>,
}

impl Constraints {
    /// Returns true if no constraint of any kind was captured.
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.deadline.is_none() && self.other.is_empty()
    }

    /// Evidence representation with one key per constraint kind.
    pub fn as_evidence(&self) -> Value {
        json!({
            "budget": self.budget,
            "deadline": self.deadline,
            "other": self.other,
        })
    }
}

/// The plan wording the user reacted to or amended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// The user's own words describing or accepting the plan.
    pub outline: String,
}

impl Plan {
    /// Evidence representation: the outline string.
    pub fn as_evidence(&self) -> Value {
        Value::String(self.outline.clone())
    }
}

/// An explicit commitment to act on the agreed plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    /// Always true for an extracted commitment; retained so evidence
    /// reads unambiguously.
    pub affirmed: bool,
    /// Timeframe clause, if the user named one.
    pub timeframe: Option<String>,
}

impl Commitment {
    /// Evidence representation with affirmation and timeframe.
    pub fn as_evidence(&self) -> Value {
        json!({
            "affirmed": self.affirmed,
            "timeframe": self.timeframe,
        })
    }
}
