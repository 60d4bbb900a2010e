//! Default keyword-marker extraction heuristics.
//!
//! Markers are attempted in the declared order; the first match wins.
//! Matching is ASCII-case-insensitive and operates on byte offsets into
//! the original text, so captured fields keep the user's own wording.

use super::types::{Commitment, Constraints, Intent, Plan};
use super::ReplyExtractor;

/// Lead-in phrases that introduce an objective, in priority order.
const INTENT_LEADS: &[&str] = &[
    "i want to ",
    "i need to ",
    "i'd like to ",
    "we want to ",
    "we need to ",
    "my goal is to ",
    "i'm trying to ",
];

/// Phrases that end an objective clause (deadline/rationale tails).
const INTENT_TERMINATORS: &[&str] = &[" by ", " before ", " so that ", " because ", ". ", ", "];

/// Budget signals, in priority order.
const BUDGET_MARKERS: &[&str] = &["$", "budget", "cannot spend", "can't spend", "afford"];

/// Deadline signals, in priority order. Overlaps with budget phrasing
/// are resolved by checking budget markers first.
const DEADLINE_MARKERS: &[&str] = &[
    "by q",
    "by the end",
    "by end of",
    "before ",
    "deadline",
    "within ",
    "no later than",
    "next quarter",
    "this quarter",
];

/// Hard-requirement signals for miscellaneous constraints.
const REQUIREMENT_MARKERS: &[&str] = &["must ", "cannot ", "can't ", "have to ", "only if "];

/// Plan acceptance or amendment signals.
const PLAN_MARKERS: &[&str] = &[
    "let's start",
    "let's begin",
    "we could start",
    "start with",
    "step one",
    "first we",
    "the plan",
    "that plan",
    "sounds like a plan",
    "let's go with",
    "works for me",
];

/// Signals that rule out a commitment regardless of later affirmations.
const COMMITMENT_NEGATIONS: &[&str] = &[
    "can't commit",
    "cannot commit",
    "not ready",
    "no deal",
    "won't sign",
];

/// Commitment affirmations, in priority order.
const COMMITMENT_MARKERS: &[&str] = &[
    "i'm in",
    "i am in",
    "i commit",
    "let's do it",
    "sign me up",
    "count me in",
    "we have a deal",
    "agreed",
];

/// Timeframe signals scanned per clause for commitments.
const TIMEFRAME_MARKERS: &[&str] = &[
    "by ",
    "tomorrow",
    "today",
    "next week",
    "this week",
    "next month",
];

/// Keyword-marker implementation of [`ReplyExtractor`].
///
/// Deliberately simple: a stronger extractor can replace it behind the
/// trait without touching tactic logic.
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Creates a new heuristic extractor.
    pub fn new() -> Self {
        Self
    }
}

impl ReplyExtractor for HeuristicExtractor {
    fn extract_intent(&self, text: &str) -> Option<Intent> {
        let lower = text.to_ascii_lowercase();

        // First lead-in in declared order wins.
        let (lead, pos) = INTENT_LEADS
            .iter()
            .find_map(|lead| lower.find(lead).map(|pos| (*lead, pos)))?;

        let tail_start = pos + lead.len();
        let tail = &text[tail_start..];
        let tail_lower = &lower[tail_start..];

        // Cut at the earliest terminator occurrence.
        let end = INTENT_TERMINATORS
            .iter()
            .filter_map(|t| tail_lower.find(t))
            .min()
            .unwrap_or(tail.len());

        let summary = tail[..end].trim().trim_end_matches(['.', ',', '!', '?']);
        if summary.is_empty() {
            return None;
        }
        Some(Intent {
            summary: summary.to_string(),
        })
    }

    fn extract_constraints(&self, text: &str) -> Option<Constraints> {
        let mut constraints = Constraints::default();

        for clause in clauses(text) {
            let clause_lower = clause.to_ascii_lowercase();

            if constraints.budget.is_none()
                && BUDGET_MARKERS.iter().any(|m| clause_lower.contains(m))
            {
                constraints.budget = Some(clause.to_string());
            }
            if constraints.deadline.is_none()
                && DEADLINE_MARKERS.iter().any(|m| clause_lower.contains(m))
            {
                constraints.deadline = Some(clause.to_string());
            }
            if REQUIREMENT_MARKERS.iter().any(|m| clause_lower.contains(m)) {
                constraints.other.push(clause.to_string());
            }
        }

        if constraints.is_empty() {
            None
        } else {
            Some(constraints)
        }
    }

    fn extract_plan(&self, text: &str) -> Option<Plan> {
        let lower = text.to_ascii_lowercase();
        if !PLAN_MARKERS.iter().any(|m| lower.contains(m)) {
            return None;
        }
        let outline = text.trim();
        if outline.is_empty() {
            return None;
        }
        Some(Plan {
            outline: outline.to_string(),
        })
    }

    fn extract_commitment(&self, text: &str) -> Option<Commitment> {
        let lower = text.to_ascii_lowercase();

        if COMMITMENT_NEGATIONS.iter().any(|m| lower.contains(m)) {
            return None;
        }

        let affirmed = COMMITMENT_MARKERS.iter().any(|m| lower.contains(m))
            || lower.trim_start().starts_with("yes");
        if !affirmed {
            return None;
        }

        let timeframe = clauses(text)
            .into_iter()
            .find(|clause| {
                let clause_lower = clause.to_ascii_lowercase();
                TIMEFRAME_MARKERS.iter().any(|m| clause_lower.contains(m))
            })
            .map(|clause| clause.to_string());

        Some(Commitment {
            affirmed: true,
            timeframe,
        })
    }
}

/// Splits a reply into trimmed, non-empty clauses.
fn clauses(text: &str) -> Vec<&str> {
    text.split(['.', ',', ';', '\n'])
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extractor() -> HeuristicExtractor {
        HeuristicExtractor::new()
    }

    mod intent {
        use super::*;

        #[test]
        fn extracts_objective_and_strips_deadline_tail() {
            let intent = extractor()
                .extract_intent("I want to grow my sales pipeline by Q3")
                .unwrap();
            assert_eq!(intent.summary, "grow my sales pipeline");
        }

        #[test]
        fn extraction_is_case_insensitive_but_preserves_wording() {
            let intent = extractor()
                .extract_intent("I NEED TO Hire Two Engineers")
                .unwrap();
            assert_eq!(intent.summary, "Hire Two Engineers");
        }

        #[test]
        fn first_lead_in_declared_order_wins() {
            // Both "i want to" and "i need to" appear; "i want to" is
            // declared first so its clause is captured.
            let intent = extractor()
                .extract_intent("I need to relax, but I want to close this deal")
                .unwrap();
            assert_eq!(intent.summary, "close this deal");
        }

        #[test]
        fn cuts_at_rationale_tail() {
            let intent = extractor()
                .extract_intent("We want to reduce churn because renewals are slipping")
                .unwrap();
            assert_eq!(intent.summary, "reduce churn");
        }

        #[test]
        fn returns_none_without_lead_in() {
            assert!(extractor().extract_intent("The weather is nice").is_none());
        }

        #[test]
        fn returns_none_for_empty_objective() {
            assert!(extractor().extract_intent("I want to ").is_none());
        }

        #[test]
        fn returns_none_for_empty_input() {
            assert!(extractor().extract_intent("").is_none());
        }
    }

    mod constraints {
        use super::*;

        #[test]
        fn captures_budget_clause() {
            let constraints = extractor()
                .extract_constraints("We have a budget of $5k for this")
                .unwrap();
            assert_eq!(
                constraints.budget.as_deref(),
                Some("We have a budget of $5k for this")
            );
        }

        #[test]
        fn captures_budget_and_deadline_from_separate_clauses() {
            let constraints = extractor()
                .extract_constraints("Under $10k total, and it has to land by Q2")
                .unwrap();
            assert_eq!(constraints.budget.as_deref(), Some("Under $10k total"));
            assert_eq!(
                constraints.deadline.as_deref(),
                Some("and it has to land by Q2")
            );
        }

        #[test]
        fn ambiguous_clause_can_fill_both_slots() {
            // Declared-order policy: a single clause matching budget and
            // deadline markers fills both, budget checked first.
            let constraints = extractor()
                .extract_constraints("spend the budget before June")
                .unwrap();
            assert!(constraints.budget.is_some());
            assert!(constraints.deadline.is_some());
        }

        #[test]
        fn captures_hard_requirements() {
            let constraints = extractor()
                .extract_constraints("We must keep the existing CRM")
                .unwrap();
            assert_eq!(constraints.other, vec!["We must keep the existing CRM"]);
        }

        #[test]
        fn returns_none_without_constraint_signals() {
            assert!(extractor()
                .extract_constraints("Everything is pretty flexible")
                .is_none());
        }

        #[test]
        fn first_matching_clause_wins_per_slot() {
            let constraints = extractor()
                .extract_constraints("$2k for tooling, maybe $8k overall")
                .unwrap();
            assert_eq!(constraints.budget.as_deref(), Some("$2k for tooling"));
        }
    }

    mod plan {
        use super::*;

        #[test]
        fn accepts_plan_agreement() {
            let plan = extractor()
                .extract_plan("That plan works, let's start with outreach next")
                .unwrap();
            assert_eq!(plan.outline, "That plan works, let's start with outreach next");
        }

        #[test]
        fn returns_none_without_plan_signal() {
            assert!(extractor().extract_plan("Hmm, tell me more").is_none());
        }
    }

    mod commitment {
        use super::*;

        #[test]
        fn extracts_plain_affirmation() {
            let commitment = extractor().extract_commitment("Yes, let's do it").unwrap();
            assert!(commitment.affirmed);
            assert_eq!(commitment.timeframe, None);
        }

        #[test]
        fn captures_timeframe_clause() {
            let commitment = extractor()
                .extract_commitment("I'm in, kickoff by Friday")
                .unwrap();
            assert_eq!(commitment.timeframe.as_deref(), Some("kickoff by Friday"));
        }

        #[test]
        fn negation_blocks_affirmation() {
            assert!(extractor()
                .extract_commitment("Yes I hear you, but I'm not ready to commit")
                .is_none());
        }

        #[test]
        fn returns_none_for_noncommittal_reply() {
            assert!(extractor()
                .extract_commitment("Let me think about it")
                .is_none());
        }
    }

    proptest! {
        /// Extraction is total: arbitrary input never panics, it only
        /// produces Some or None.
        #[test]
        fn extraction_never_panics(text in ".{0,200}") {
            let ex = extractor();
            let _ = ex.extract_intent(&text);
            let _ = ex.extract_constraints(&text);
            let _ = ex.extract_plan(&text);
            let _ = ex.extract_commitment(&text);
        }

        /// Extraction is deterministic for any input.
        #[test]
        fn extraction_is_deterministic(text in ".{0,200}") {
            let ex = extractor();
            prop_assert_eq!(ex.extract_intent(&text), ex.extract_intent(&text));
            prop_assert_eq!(ex.extract_constraints(&text), ex.extract_constraints(&text));
        }
    }
}
