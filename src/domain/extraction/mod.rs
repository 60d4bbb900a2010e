//! Structured-field extraction from free-form replies.
//!
//! Each extractor is pure and total: it attempts candidate markers in a
//! fixed, documented order, returns the first structured match, and
//! returns `None` when nothing matches. Absence of structure is an
//! expected, common outcome, never an error.
//!
//! The trait decouples extraction from tactic logic so a stronger
//! NLU/LLM-backed extractor can be substituted without touching tactics.

mod heuristics;
mod types;

pub use heuristics::HeuristicExtractor;
pub use types::{Commitment, Constraints, Intent, Plan};

/// Pluggable extraction collaborator.
///
/// Implementations must never panic on unparseable input and must not
/// perform I/O; the default `HeuristicExtractor` scans keyword markers.
pub trait ReplyExtractor: Send + Sync {
    /// Extracts the user's stated objective.
    fn extract_intent(&self, text: &str) -> Option<Intent>;

    /// Extracts budget/deadline/other constraints.
    fn extract_constraints(&self, text: &str) -> Option<Constraints>;

    /// Extracts acceptance of (or amendments to) a proposed plan.
    fn extract_plan(&self, text: &str) -> Option<Plan>;

    /// Extracts an explicit commitment to act.
    fn extract_commitment(&self, text: &str) -> Option<Commitment>;
}
