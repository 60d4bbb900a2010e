//! A single milestone within a conversation template.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::GoalId;

/// A named milestone that becomes complete once its success criterion
/// is met.
///
/// Completion is monotonic: once a goal is complete there is no way to
/// revert it. Evidence is an open key/value bag; keys are defined by
/// whichever tactic writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    id: GoalId,
    complete: bool,
    evidence: Map<String, Value>,
}

impl Goal {
    /// Creates a new incomplete goal with no evidence.
    pub fn new(id: impl Into<GoalId>) -> Self {
        Self {
            id: id.into(),
            complete: false,
            evidence: Map::new(),
        }
    }

    /// Returns the goal's identifier.
    pub fn id(&self) -> &GoalId {
        &self.id
    }

    /// Returns true if the goal's success criterion has been met.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the evidence stored under `key`, if any.
    pub fn evidence(&self, key: &str) -> Option<&Value> {
        self.evidence.get(key)
    }

    /// Returns the full evidence bag.
    pub fn evidence_bag(&self) -> &Map<String, Value> {
        &self.evidence
    }

    /// Returns a copy of this goal marked complete.
    ///
    /// There is deliberately no inverse operation.
    pub(crate) fn completed(&self) -> Self {
        Self {
            id: self.id.clone(),
            complete: true,
            evidence: self.evidence.clone(),
        }
    }

    /// Returns a copy of this goal with `key` set to `value` in the
    /// evidence bag. Existing entries under the same key are replaced.
    pub(crate) fn with_evidence(&self, key: impl Into<String>, value: Value) -> Self {
        let mut evidence = self.evidence.clone();
        evidence.insert(key.into(), value);
        Self {
            id: self.id.clone(),
            complete: self.complete,
            evidence,
        }
    }
}
