//! Conversation state value type.
//!
//! Owned exclusively by the engine; every update produces a new,
//! fully-independent copy via explicit copy construction. Callers must
//! treat any state they hold as frozen and thread the value returned
//! by a tactic's `apply` into the next turn.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{ConversationId, Satisfaction};

use super::{Goal, UserAct};

/// Goal id: understand what the user is trying to achieve.
pub const DIAGNOSE_INTENT: &str = "diagnose_intent";

/// Goal id: surface the constraints the user is operating under.
pub const IMPROVE_CLARITY: &str = "improve_clarity";

/// Goal id: put a concrete plan in front of the user.
pub const PROPOSE_PLAN: &str = "propose_plan";

/// Goal id: secure an explicit commitment to the plan.
pub const SECURE_COMMIT: &str = "secure_commit";

/// Where a conversation stands: goal completion, gathered evidence,
/// estimated satisfaction, and detour accounting.
///
/// Goals never change identity or cardinality mid-conversation; only
/// completion flags and evidence mutate, and completion is monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    id: ConversationId,
    goals: Vec<Goal>,
    satisfaction: Satisfaction,
    detours_used: u32,
    last_user_act: UserAct,
}

impl ConversationState {
    /// Creates a fresh state over the given goal template: all goals
    /// incomplete, default satisfaction, zero detours, neutral act.
    pub fn new(goals: Vec<Goal>) -> Self {
        Self {
            id: ConversationId::new(),
            goals,
            satisfaction: Satisfaction::default(),
            detours_used: 0,
            last_user_act: UserAct::default(),
        }
    }

    /// Creates a state over the standard four-goal template:
    /// diagnose intent, improve clarity, propose plan, secure commit.
    ///
    /// Order is insertion-significant: it reflects intended dependency,
    /// though actual gating is encoded in each tactic's `when`.
    pub fn standard() -> Self {
        Self::new(vec![
            Goal::new(DIAGNOSE_INTENT),
            Goal::new(IMPROVE_CLARITY),
            Goal::new(PROPOSE_PLAN),
            Goal::new(SECURE_COMMIT),
        ])
    }

    /// Returns the conversation's identifier.
    pub fn id(&self) -> ConversationId {
        self.id
    }

    /// Returns the ordered goal sequence.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Returns the current satisfaction estimate.
    pub fn satisfaction(&self) -> Satisfaction {
        self.satisfaction
    }

    /// Returns how many off-topic detours have been granted.
    pub fn detours_used(&self) -> u32 {
        self.detours_used
    }

    /// Returns the classification of the most recent user utterance.
    pub fn last_user_act(&self) -> UserAct {
        self.last_user_act
    }

    /// Returns true if the named goal is complete.
    ///
    /// Returns false for unknown ids rather than panicking; a tactic
    /// referencing a goal absent from the template is a configuration
    /// bug to be caught by tests.
    pub fn is_goal_complete(&self, goal_id: &str) -> bool {
        self.find_goal(goal_id)
            .map(Goal::is_complete)
            .unwrap_or(false)
    }

    /// Returns the evidence stored for a goal under `key`, if any.
    pub fn evidence(&self, goal_id: &str, key: &str) -> Option<&Value> {
        self.find_goal(goal_id).and_then(|g| g.evidence(key))
    }

    /// Returns true if every goal in the template is complete.
    pub fn all_goals_complete(&self) -> bool {
        self.goals.iter().all(Goal::is_complete)
    }

    /// Returns a copy with the named goal marked complete.
    ///
    /// Unknown ids leave the state unchanged (see `is_goal_complete`).
    pub fn with_goal_completed(&self, goal_id: &str) -> Self {
        self.map_goal(goal_id, Goal::completed)
    }

    /// Returns a copy with `key` set in the named goal's evidence bag.
    pub fn with_evidence(&self, goal_id: &str, key: &str, value: Value) -> Self {
        self.map_goal(goal_id, |g| g.with_evidence(key, value.clone()))
    }

    /// Returns a copy with the given satisfaction estimate.
    pub fn with_satisfaction(&self, satisfaction: Satisfaction) -> Self {
        Self {
            satisfaction,
            ..self.clone()
        }
    }

    /// Returns a copy with one more detour granted.
    pub fn with_detour_granted(&self) -> Self {
        Self {
            detours_used: self.detours_used.saturating_add(1),
            ..self.clone()
        }
    }

    /// Returns a copy with one detour returned (saturating at zero).
    pub fn with_detour_returned(&self) -> Self {
        Self {
            detours_used: self.detours_used.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Returns a copy with the latest user-act classification.
    pub fn with_user_act(&self, act: UserAct) -> Self {
        Self {
            last_user_act: act,
            ..self.clone()
        }
    }

    fn find_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id().as_str() == goal_id)
    }

    fn map_goal(&self, goal_id: &str, f: impl Fn(&Goal) -> Goal) -> Self {
        let goals = self
            .goals
            .iter()
            .map(|g| {
                if g.id().as_str() == goal_id {
                    f(g)
                } else {
                    g.clone()
                }
            })
            .collect();
        Self {
            goals,
            ..self.clone()
        }
    }
}
