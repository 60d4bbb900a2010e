//! Tactic registry and deterministic per-turn selection.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::extraction::ReplyExtractor;
use crate::domain::goals::ConversationState;

use super::catalog::standard_tactics;
use super::config::TacticConfig;
use super::tactic::Tactic;

/// No tactic's eligibility predicate holds for the current state.
///
/// This is the only fatal-to-the-turn condition. It cannot occur when
/// the registry contains an always-eligible fallback (the standard
/// catalog's `reflect` tactic); callers without one decide whether to
/// end the conversation or register a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no tactic is eligible for the current conversation state")]
pub struct NoEligibleTacticError;

/// The fixed set of tactics for a conversation template.
///
/// Registration order is stable and significant: when two eligible
/// tactics score equal utility, the first-registered one wins. The
/// registry is stateless after construction and safely shared
/// read-only across concurrent conversations.
pub struct TacticRegistry {
    tactics: Vec<Arc<dyn Tactic>>,
}

impl TacticRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tactics: Vec::new(),
        }
    }

    /// Creates the standard registry over the given extractor, with
    /// default configuration.
    pub fn standard(extractor: Arc<dyn ReplyExtractor>) -> Self {
        Self::with_config(TacticConfig::default(), extractor)
    }

    /// Creates the standard registry with explicit configuration.
    pub fn with_config(config: TacticConfig, extractor: Arc<dyn ReplyExtractor>) -> Self {
        let mut registry = Self::new();
        for tactic in standard_tactics(config, extractor) {
            registry.register(tactic);
        }
        registry
    }

    /// Appends a tactic. Later registrations lose utility ties to
    /// earlier ones.
    pub fn register(&mut self, tactic: Arc<dyn Tactic>) {
        self.tactics.push(tactic);
    }

    /// Looks up a tactic by id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Tactic>> {
        self.tactics.iter().find(|t| t.id() == id)
    }

    /// Returns registered tactic ids in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.tactics.iter().map(|t| t.id()).collect()
    }

    /// Picks exactly one tactic for the current turn.
    ///
    /// Eligible tactics are scored by `utility`; the strictly highest
    /// score wins, and ties resolve to the first-registered tactic.
    /// Selection is deterministic for a fixed state and registry.
    pub fn select(&self, state: &ConversationState) -> Result<&Arc<dyn Tactic>, NoEligibleTacticError> {
        let mut eligible_count = 0usize;
        let mut best: Option<(&Arc<dyn Tactic>, f64)> = None;

        for tactic in &self.tactics {
            if !tactic.when(state) {
                continue;
            }
            eligible_count += 1;
            let score = tactic.utility(state);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((tactic, score)),
            }
        }

        match best {
            Some((tactic, score)) => {
                debug!(
                    tactic = tactic.id(),
                    score,
                    eligible = eligible_count,
                    "selected tactic"
                );
                Ok(tactic)
            }
            None => Err(NoEligibleTacticError),
        }
    }
}

impl Default for TacticRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tactics::tactic::TacticPrompt;

    /// Minimal tactic with a fixed utility, for selection tests.
    struct FixedTactic {
        id: &'static str,
        utility: f64,
        eligible: bool,
    }

    impl FixedTactic {
        fn new(id: &'static str, utility: f64) -> Arc<dyn Tactic> {
            Arc::new(Self {
                id,
                utility,
                eligible: true,
            })
        }

        fn ineligible(id: &'static str) -> Arc<dyn Tactic> {
            Arc::new(Self {
                id,
                utility: 1.0,
                eligible: false,
            })
        }
    }

    impl Tactic for FixedTactic {
        fn id(&self) -> &str {
            self.id
        }

        fn when(&self, _state: &ConversationState) -> bool {
            self.eligible
        }

        fn utility(&self, _state: &ConversationState) -> f64 {
            self.utility
        }

        fn enact(&self, _state: &ConversationState) -> TacticPrompt {
            TacticPrompt::new("fixed", self.id)
        }

        fn apply(&self, state: &ConversationState, _reply: &str) -> ConversationState {
            state.clone()
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn empty_registry_yields_no_eligible_tactic() {
            let registry = TacticRegistry::new();
            let state = ConversationState::standard();
            assert!(matches!(registry.select(&state), Err(NoEligibleTacticError)));
        }

        #[test]
        fn all_ineligible_yields_no_eligible_tactic() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::ineligible("a"));
            registry.register(FixedTactic::ineligible("b"));
            let state = ConversationState::standard();
            assert!(registry.select(&state).is_err());
        }

        #[test]
        fn highest_utility_wins() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::new("low", 0.2));
            registry.register(FixedTactic::new("high", 0.9));
            registry.register(FixedTactic::new("mid", 0.5));
            let state = ConversationState::standard();
            assert_eq!(registry.select(&state).unwrap().id(), "high");
        }

        #[test]
        fn ineligible_tactics_are_never_selected() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::ineligible("blocked"));
            registry.register(FixedTactic::new("open", 0.1));
            let state = ConversationState::standard();
            assert_eq!(registry.select(&state).unwrap().id(), "open");
        }
    }

    mod tie_breaking {
        use super::*;

        #[test]
        fn first_registered_wins_ties() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::new("first", 0.8));
            registry.register(FixedTactic::new("second", 0.8));
            let state = ConversationState::standard();
            assert_eq!(registry.select(&state).unwrap().id(), "first");
        }

        #[test]
        fn tie_break_is_stable_across_repeated_runs() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::new("first", 0.8));
            registry.register(FixedTactic::new("second", 0.8));
            let state = ConversationState::standard();
            for _ in 0..50 {
                assert_eq!(registry.select(&state).unwrap().id(), "first");
            }
        }

        #[test]
        fn registration_order_decides_only_on_exact_ties() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::new("first", 0.8));
            registry.register(FixedTactic::new("second", 0.800001));
            let state = ConversationState::standard();
            assert_eq!(registry.select(&state).unwrap().id(), "second");
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn get_finds_registered_tactic() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::new("present", 0.5));
            assert!(registry.get("present").is_some());
            assert!(registry.get("absent").is_none());
        }

        #[test]
        fn ids_preserve_registration_order() {
            let mut registry = TacticRegistry::new();
            registry.register(FixedTactic::new("a", 0.1));
            registry.register(FixedTactic::new("b", 0.2));
            registry.register(FixedTactic::new("c", 0.3));
            assert_eq!(registry.ids(), vec!["a", "b", "c"]);
        }
    }
}
