//! The standard tactic catalog.
//!
//! Four goal-directed tactics carry the conversation through the
//! standard template; four friction tactics absorb pushback and
//! off-topic detours; a reflective fallback keeps the eligible set
//! provably non-empty.
//!
//! Goal tactics are gated on a neutral user act: while the latest reply
//! is classified as pushback or off-topic, the friction tactics own the
//! turn and the goal tactics stand down.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::extraction::{Constraints, ReplyExtractor};
use crate::domain::goals::{self, ConversationState};

use super::config::TacticConfig;
use super::tactic::{Tactic, TacticPrompt};

/// Tactic id: ask what the user is trying to achieve.
pub const ASK_INTENT: &str = "ask_intent";

/// Tactic id: surface budget, deadline, and other constraints.
pub const ASK_CONSTRAINTS: &str = "ask_constraints";

/// Tactic id: put a concrete plan in front of the user.
pub const PROPOSE_PLAN: &str = "propose_plan";

/// Tactic id: ask for an explicit commitment.
pub const SECURE_COMMIT: &str = "secure_commit";

/// Tactic id: counter pushback with alternative options.
pub const OFFER_ALTERNATIVES: &str = "offer_alternatives";

/// Tactic id: acknowledge pushback directly.
pub const HANDLE_PUSHBACK: &str = "handle_pushback";

/// Tactic id: grant a bounded off-topic excursion.
pub const ALLOW_DETOUR: &str = "allow_detour";

/// Tactic id: steer an off-topic conversation back to the goal.
pub const RETURN_TO_GOAL: &str = "return_to_goal";

/// Tactic id: always-eligible reflective acknowledgment fallback.
pub const REFLECT: &str = "reflect";

const UTILITY_ASK_INTENT: f64 = 0.9;
const UTILITY_ASK_CONSTRAINTS: f64 = 0.75;
const UTILITY_PROPOSE_PLAN: f64 = 0.8;
const UTILITY_OFFER_ALTERNATIVES: f64 = 0.8;
const UTILITY_HANDLE_PUSHBACK: f64 = 0.7;
const UTILITY_ALLOW_DETOUR: f64 = 0.75;
const UTILITY_RETURN_TO_GOAL: f64 = 0.65;
const UTILITY_REFLECT: f64 = 0.05;

// secure_commit scales with satisfaction: 0.6 at the floor, 0.85 at
// the ceiling, so commitment is pressed harder on a receptive user.
const SECURE_COMMIT_BASE: f64 = 0.6;
const SECURE_COMMIT_SLOPE: f64 = 0.25;

/// Builds the standard catalog in canonical registration order.
///
/// Order matters: it is the utility tie-break order (first registered
/// wins), and the `reflect` fallback comes last.
pub(crate) fn standard_tactics(
    config: TacticConfig,
    extractor: Arc<dyn ReplyExtractor>,
) -> Vec<Arc<dyn Tactic>> {
    vec![
        Arc::new(AskIntent {
            extractor: Arc::clone(&extractor),
        }),
        Arc::new(AskConstraints {
            extractor: Arc::clone(&extractor),
        }),
        Arc::new(ProposePlan {
            extractor: Arc::clone(&extractor),
        }),
        Arc::new(SecureCommit { extractor }),
        Arc::new(OfferAlternatives {
            step: config.satisfaction_step,
        }),
        Arc::new(HandlePushback {
            step: config.satisfaction_step,
        }),
        Arc::new(AllowDetour {
            cap: config.detour_cap,
        }),
        Arc::new(ReturnToGoal),
        Arc::new(Reflect),
    ]
}

/// True while the latest reply needs no friction handling.
fn on_track(state: &ConversationState) -> bool {
    state.last_user_act().is_neutral()
}

/// Asks for the user's objective; completes `diagnose_intent`.
///
/// Evidence written: `intent` (string summary).
struct AskIntent {
    extractor: Arc<dyn ReplyExtractor>,
}

impl Tactic for AskIntent {
    fn id(&self) -> &str {
        ASK_INTENT
    }

    fn when(&self, state: &ConversationState) -> bool {
        on_track(state) && !state.is_goal_complete(goals::DIAGNOSE_INTENT)
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_ASK_INTENT
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "Open the conversation. Be curious and concrete; do not pitch anything yet.",
            "What are you hoping to achieve right now?",
        )
    }

    fn apply(&self, state: &ConversationState, reply: &str) -> ConversationState {
        match self.extractor.extract_intent(reply) {
            Some(intent) => state
                .with_evidence(goals::DIAGNOSE_INTENT, "intent", intent.as_evidence())
                .with_goal_completed(goals::DIAGNOSE_INTENT),
            None => state.clone(),
        }
    }
}

/// Surfaces constraints; completes `improve_clarity`.
///
/// Evidence written: `constraints` (budget/deadline/other record).
/// A reply with no recognizable constraints still completes the goal
/// with an empty record: "no constraints stated" is itself clarity.
struct AskConstraints {
    extractor: Arc<dyn ReplyExtractor>,
}

impl Tactic for AskConstraints {
    fn id(&self) -> &str {
        ASK_CONSTRAINTS
    }

    fn when(&self, state: &ConversationState) -> bool {
        on_track(state)
            && state.is_goal_complete(goals::DIAGNOSE_INTENT)
            && !state.is_goal_complete(goals::IMPROVE_CLARITY)
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_ASK_CONSTRAINTS
    }

    fn enact(&self, state: &ConversationState) -> TacticPrompt {
        let user_prompt = match intent_summary(state) {
            Some(intent) => format!(
                "To make \"{intent}\" happen, what are you working within — budget, timing, anything non-negotiable?"
            ),
            None => {
                "What are you working within — budget, timing, anything non-negotiable?".to_string()
            }
        };
        TacticPrompt::new(
            "Probe for hard constraints before proposing anything. Accept 'none' as an answer.",
            user_prompt,
        )
    }

    fn apply(&self, state: &ConversationState, reply: &str) -> ConversationState {
        let constraints = self
            .extractor
            .extract_constraints(reply)
            .unwrap_or_else(Constraints::default);
        state
            .with_evidence(
                goals::IMPROVE_CLARITY,
                "constraints",
                constraints.as_evidence(),
            )
            .with_goal_completed(goals::IMPROVE_CLARITY)
    }
}

/// Puts a plan in front of the user; completes `propose_plan` once the
/// user engages with it.
///
/// Evidence written: `plan` (the user's accepted wording).
struct ProposePlan {
    extractor: Arc<dyn ReplyExtractor>,
}

impl Tactic for ProposePlan {
    fn id(&self) -> &str {
        PROPOSE_PLAN
    }

    fn when(&self, state: &ConversationState) -> bool {
        on_track(state)
            && state.is_goal_complete(goals::DIAGNOSE_INTENT)
            && state.is_goal_complete(goals::IMPROVE_CLARITY)
            && !state.is_goal_complete(goals::PROPOSE_PLAN)
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_PROPOSE_PLAN
    }

    fn enact(&self, state: &ConversationState) -> TacticPrompt {
        let user_prompt = match intent_summary(state) {
            Some(intent) => format!(
                "Here's how I'd approach \"{intent}\": start small, prove it works, then scale. How does that land?"
            ),
            None => "Here's a plan: start small, prove it works, then scale. How does that land?"
                .to_string(),
        };
        TacticPrompt::new(
            "Propose a concrete first plan grounded in the stated intent and constraints. Invite amendments.",
            user_prompt,
        )
    }

    fn apply(&self, state: &ConversationState, reply: &str) -> ConversationState {
        match self.extractor.extract_plan(reply) {
            Some(plan) => state
                .with_evidence(goals::PROPOSE_PLAN, "plan", plan.as_evidence())
                .with_goal_completed(goals::PROPOSE_PLAN),
            None => state.clone(),
        }
    }
}

/// Asks for an explicit commitment; completes `secure_commit`.
///
/// Evidence written: `commitment` (affirmation + timeframe record).
/// Utility scales with satisfaction so the close is pressed harder on
/// a receptive user and softened on a frustrated one.
struct SecureCommit {
    extractor: Arc<dyn ReplyExtractor>,
}

impl Tactic for SecureCommit {
    fn id(&self) -> &str {
        SECURE_COMMIT
    }

    fn when(&self, state: &ConversationState) -> bool {
        on_track(state)
            && state.is_goal_complete(goals::PROPOSE_PLAN)
            && !state.is_goal_complete(goals::SECURE_COMMIT)
    }

    fn utility(&self, state: &ConversationState) -> f64 {
        SECURE_COMMIT_BASE + SECURE_COMMIT_SLOPE * state.satisfaction().value()
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "Ask for a clear yes and a start date. Do not introduce new material.",
            "Shall we lock this in? When would you like to start?",
        )
    }

    fn apply(&self, state: &ConversationState, reply: &str) -> ConversationState {
        match self.extractor.extract_commitment(reply) {
            Some(commitment) => state
                .with_evidence(
                    goals::SECURE_COMMIT,
                    "commitment",
                    commitment.as_evidence(),
                )
                .with_goal_completed(goals::SECURE_COMMIT),
            None => state.clone(),
        }
    }
}

/// Counters pushback by offering different options.
///
/// Adjusts satisfaction only; never touches goals. Giving the user a
/// way out tends to restore goodwill, hence the raise.
struct OfferAlternatives {
    step: f64,
}

impl Tactic for OfferAlternatives {
    fn id(&self) -> &str {
        OFFER_ALTERNATIVES
    }

    fn when(&self, state: &ConversationState) -> bool {
        state.last_user_act().is_pushback()
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_OFFER_ALTERNATIVES
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "The user pushed back. Offer two genuinely different options instead of defending the current one.",
            "Fair enough — would a lighter version or a different angle work better for you?",
        )
    }

    fn apply(&self, state: &ConversationState, _reply: &str) -> ConversationState {
        state.with_satisfaction(state.satisfaction().raised_by(self.step))
    }
}

/// Acknowledges pushback head-on.
///
/// Adjusts satisfaction only. Registering friction keeps the utility
/// landscape honest about a resistant user.
struct HandlePushback {
    step: f64,
}

impl Tactic for HandlePushback {
    fn id(&self) -> &str {
        HANDLE_PUSHBACK
    }

    fn when(&self, state: &ConversationState) -> bool {
        state.last_user_act().is_pushback()
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_HANDLE_PUSHBACK
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "Acknowledge the objection plainly and ask what's behind it. Do not argue.",
            "I hear you. What's the main thing that doesn't sit right?",
        )
    }

    fn apply(&self, state: &ConversationState, _reply: &str) -> ConversationState {
        state.with_satisfaction(state.satisfaction().lowered_by(self.step))
    }
}

/// Grants a bounded off-topic excursion.
///
/// Eligible only below the detour cap; once the cap is hit this tactic
/// stands down and `return_to_goal` dominates.
struct AllowDetour {
    cap: u32,
}

impl Tactic for AllowDetour {
    fn id(&self) -> &str {
        ALLOW_DETOUR
    }

    fn when(&self, state: &ConversationState) -> bool {
        state.last_user_act().is_offtopic() && state.detours_used() < self.cap
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_ALLOW_DETOUR
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "Follow the user's tangent briefly and with genuine interest, then leave a door back to the goal.",
            "Happy to go there for a moment — tell me more.",
        )
    }

    fn apply(&self, state: &ConversationState, _reply: &str) -> ConversationState {
        state.with_detour_granted()
    }
}

/// Steers the conversation back after a detour.
struct ReturnToGoal;

impl Tactic for ReturnToGoal {
    fn id(&self) -> &str {
        RETURN_TO_GOAL
    }

    fn when(&self, state: &ConversationState) -> bool {
        state.last_user_act().is_offtopic() && state.detours_used() > 0
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_RETURN_TO_GOAL
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "Close the tangent warmly and restate where the conversation left off.",
            "Good tangent! Picking back up where we were — shall we?",
        )
    }

    fn apply(&self, state: &ConversationState, _reply: &str) -> ConversationState {
        state.with_detour_returned()
    }
}

/// Always-eligible reflective acknowledgment.
///
/// Guarantees the eligible set is never empty; its utility is low
/// enough that any purposeful tactic outranks it.
struct Reflect;

impl Tactic for Reflect {
    fn id(&self) -> &str {
        REFLECT
    }

    fn when(&self, _state: &ConversationState) -> bool {
        true
    }

    fn utility(&self, _state: &ConversationState) -> f64 {
        UTILITY_REFLECT
    }

    fn enact(&self, _state: &ConversationState) -> TacticPrompt {
        TacticPrompt::new(
            "Reflect the user's last message back in your own words and invite them to continue.",
            "Let me make sure I'm following — say more about that?",
        )
    }

    fn apply(&self, state: &ConversationState, _reply: &str) -> ConversationState {
        state.clone()
    }
}

fn intent_summary(state: &ConversationState) -> Option<&str> {
    state
        .evidence(goals::DIAGNOSE_INTENT, "intent")
        .and_then(Value::as_str)
}
