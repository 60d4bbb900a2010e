//! Classification tag for the most recent user utterance.

use serde::{Deserialize, Serialize};

/// How the user's latest reply relates to the conversation's goals.
///
/// Classification itself is an external collaborator (see
/// `ports::classifier`); the engine only consumes the tag when
/// evaluating tactic eligibility and utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserAct {
    /// User resisted the assistant's direction (objection, refusal).
    Pushback,

    /// User steered away from the current goal entirely.
    Offtopic,

    /// On-topic, cooperative, or unremarkable reply.
    #[default]
    Neutral,
}

impl UserAct {
    /// Returns true if the user is resisting the current direction.
    pub fn is_pushback(&self) -> bool {
        matches!(self, Self::Pushback)
    }

    /// Returns true if the user has wandered off topic.
    pub fn is_offtopic(&self) -> bool {
        matches!(self, Self::Offtopic)
    }

    /// Returns true if the reply needs no special handling.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_act_is_neutral() {
        assert_eq!(UserAct::default(), UserAct::Neutral);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&UserAct::Pushback).unwrap();
        assert_eq!(json, "\"pushback\"");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let act: UserAct = serde_json::from_str("\"offtopic\"").unwrap();
        assert_eq!(act, UserAct::Offtopic);
    }

    #[test]
    fn predicates_match_variants() {
        assert!(UserAct::Pushback.is_pushback());
        assert!(UserAct::Offtopic.is_offtopic());
        assert!(UserAct::Neutral.is_neutral());
        assert!(!UserAct::Neutral.is_pushback());
        assert!(!UserAct::Pushback.is_offtopic());
    }
}
