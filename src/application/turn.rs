//! The turn cycle: one selected tactic per assistant turn.
//!
//! A turn has two halves. Opening a turn selects a tactic, enacts it,
//! and renders the assistant message. Resolving a turn feeds the user's
//! reply back through the *same* tactic and classifies the reply for
//! the next turn's eligibility checks. Callers hold the state between
//! the halves; the cycle itself is stateless and shareable.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::goals::ConversationState;
use crate::domain::tactics::{NoEligibleTacticError, TacticPrompt, TacticRegistry};
use crate::ports::{RenderError, ResponseRenderer, UserActClassifier};

/// Errors from opening or resolving a turn.
#[derive(Debug, Error)]
pub enum TurnError {
    /// No tactic was eligible for the state (see [`NoEligibleTacticError`]).
    #[error(transparent)]
    NoEligibleTactic(#[from] NoEligibleTacticError),

    /// The reply was attributed to a tactic id the registry doesn't know.
    #[error("unknown tactic id: {0}")]
    UnknownTactic(String),

    /// The renderer failed to produce an assistant message.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Everything the caller needs to put an assistant turn on the wire.
///
/// `tactic_id` must be echoed back to [`TurnCycle::resolve_turn`] with
/// the user's reply, so the tactic that asked the question interprets
/// the answer.
#[derive(Debug, Clone)]
pub struct OpenTurn {
    /// Id of the tactic that owns this turn.
    pub tactic_id: String,
    /// The guidance the tactic produced.
    pub prompt: TacticPrompt,
    /// The rendered, user-facing assistant message.
    pub message: String,
}

/// Orchestrates turns over a registry, a classifier, and a renderer.
pub struct TurnCycle {
    registry: Arc<TacticRegistry>,
    classifier: Arc<dyn UserActClassifier>,
    renderer: Arc<dyn ResponseRenderer>,
}

impl TurnCycle {
    /// Wires a turn cycle from its collaborators.
    pub fn new(
        registry: Arc<TacticRegistry>,
        classifier: Arc<dyn UserActClassifier>,
        renderer: Arc<dyn ResponseRenderer>,
    ) -> Self {
        Self {
            registry,
            classifier,
            renderer,
        }
    }

    /// Opens an assistant turn: select, enact, render.
    ///
    /// Pure up to rendering; the state is not advanced here.
    pub async fn open_turn(&self, state: &ConversationState) -> Result<OpenTurn, TurnError> {
        let tactic = self.registry.select(state)?;
        let prompt = tactic.enact(state);
        let message = self.renderer.render(&prompt).await?;

        info!(
            conversation = %state.id(),
            tactic = tactic.id(),
            "opened turn"
        );

        Ok(OpenTurn {
            tactic_id: tactic.id().to_string(),
            prompt,
            message,
        })
    }

    /// Resolves a turn: the owning tactic applies the reply, then the
    /// reply is classified for the next turn.
    ///
    /// Classification runs after `apply` so the fresh act is what the
    /// next selection sees; tactics never touch the act themselves.
    pub fn resolve_turn(
        &self,
        state: &ConversationState,
        tactic_id: &str,
        reply: &str,
    ) -> Result<ConversationState, TurnError> {
        let tactic = self
            .registry
            .get(tactic_id)
            .ok_or_else(|| TurnError::UnknownTactic(tactic_id.to_string()))?;

        let next = tactic.apply(state, reply);
        let act = self.classifier.classify(reply);

        debug!(
            conversation = %state.id(),
            tactic = tactic_id,
            act = ?act,
            "resolved turn"
        );

        Ok(next.with_user_act(act))
    }
}
