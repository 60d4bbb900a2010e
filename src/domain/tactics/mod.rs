//! Tactic registry and per-turn selection.
//!
//! A tactic bundles an eligibility check, a priority score, a
//! prompt-construction step, and a state-update step. The registry
//! holds the fixed tactic set and deterministically picks one per turn.

mod catalog;
mod config;
mod registry;
mod tactic;

pub use catalog::{
    ALLOW_DETOUR, ASK_CONSTRAINTS, ASK_INTENT, HANDLE_PUSHBACK, OFFER_ALTERNATIVES, PROPOSE_PLAN,
    REFLECT, RETURN_TO_GOAL, SECURE_COMMIT,
};
pub use config::TacticConfig;
pub use registry::{NoEligibleTacticError, TacticRegistry};
pub use tactic::{Tactic, TacticPrompt};
