//! The tactic contract.

use serde::{Deserialize, Serialize};

use crate::domain::goals::ConversationState;

/// Guidance for the rendering collaborator: what stance the assistant
/// should take and what it should ask.
///
/// The engine never talks to the user directly; an external renderer
/// (typically an LLM call) turns this pair into the literal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TacticPrompt {
    /// Behavioral guidance for the response generator.
    pub system_hint: String,
    /// The question or move to put to the user.
    pub user_prompt: String,
}

impl TacticPrompt {
    /// Creates a new prompt pair.
    pub fn new(system_hint: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_hint: system_hint.into(),
            user_prompt: user_prompt.into(),
        }
    }
}

/// A named conversational policy.
///
/// All four methods are pure: no I/O, no blocking, no panics, no
/// mutation of the input state. `apply` interprets the reply to the
/// question *this* tactic asked, which keeps a strict turn-based
/// contract: the tactic that owns the outstanding question owns the
/// interpretation of its answer.
pub trait Tactic: Send + Sync {
    /// Stable identifier, unique within a registry.
    fn id(&self) -> &str;

    /// Eligibility predicate for the current state.
    fn when(&self, state: &ConversationState) -> bool;

    /// Priority score; higher wins among eligible tactics.
    fn utility(&self, state: &ConversationState) -> f64;

    /// Produces guidance for the rendering collaborator.
    fn enact(&self, state: &ConversationState) -> TacticPrompt;

    /// Consumes the user's literal reply and returns the next state.
    ///
    /// The input state must be treated as frozen; callers thread the
    /// returned value into the next turn.
    fn apply(&self, state: &ConversationState, reply: &str) -> ConversationState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_pair_holds_both_fields() {
        let prompt = TacticPrompt::new("be curious", "What are you trying to achieve?");
        assert_eq!(prompt.system_hint, "be curious");
        assert_eq!(prompt.user_prompt, "What are you trying to achieve?");
    }

    #[test]
    fn prompt_serializes_round_trip() {
        let prompt = TacticPrompt::new("hint", "ask");
        let json = serde_json::to_string(&prompt).unwrap();
        let back: TacticPrompt = serde_json::from_str(&json).unwrap();
        assert_eq!(prompt, back);
    }
}
