//! Response renderer port.
//!
//! A selected tactic produces a [`TacticPrompt`]; something outside the
//! engine (typically an LLM call) must turn that guidance into the
//! literal assistant message. This port is that seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::tactics::TacticPrompt;

/// Rendering failure modes.
///
/// Rendering is the only fallible step of opening a turn; selection
/// and enactment are pure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The rendering backend rejected or failed the request.
    #[error("rendering backend error: {0}")]
    Backend(String),

    /// The backend returned an empty or unusable message.
    #[error("rendering produced an empty message")]
    EmptyResponse,
}

impl RenderError {
    /// Wraps a backend failure description.
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }
}

/// Port for turning tactic guidance into a user-facing message.
///
/// Implementations may call out to an LLM, fill a template, or anything
/// in between. The engine makes no assumption beyond "a non-empty
/// message comes back or an error does".
#[async_trait]
pub trait ResponseRenderer: Send + Sync {
    /// Renders the literal assistant message for this turn.
    async fn render(&self, prompt: &TacticPrompt) -> Result<String, RenderError>;
}
