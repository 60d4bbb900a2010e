//! Template-based response renderer.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::tactics::TacticPrompt;
use crate::ports::{RenderError, ResponseRenderer};

/// Renderer that passes the tactic's own prompt wording through as the
/// assistant message.
///
/// Useful as a deterministic default and in tests; production setups
/// substitute an LLM-backed renderer that uses `system_hint` to steer
/// generation.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Creates a new template renderer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseRenderer for TemplateRenderer {
    async fn render(&self, prompt: &TacticPrompt) -> Result<String, RenderError> {
        let message = prompt.user_prompt.trim();
        if message.is_empty() {
            return Err(RenderError::EmptyResponse);
        }
        debug!(chars = message.len(), "rendered template message");
        Ok(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_user_prompt_through() {
        let renderer = TemplateRenderer::new();
        let prompt = TacticPrompt::new("be curious", "What are you hoping to achieve?");
        let message = renderer.render(&prompt).await.unwrap();
        assert_eq!(message, "What are you hoping to achieve?");
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        let renderer = TemplateRenderer::new();
        let prompt = TacticPrompt::new("hint", "  hello there \n");
        let message = renderer.render(&prompt).await.unwrap();
        assert_eq!(message, "hello there");
    }

    #[tokio::test]
    async fn rejects_empty_prompt() {
        let renderer = TemplateRenderer::new();
        let prompt = TacticPrompt::new("hint", "   ");
        assert!(matches!(
            renderer.render(&prompt).await,
            Err(RenderError::EmptyResponse)
        ));
    }
}
