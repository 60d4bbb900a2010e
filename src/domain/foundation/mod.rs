//! Shared value objects and error types for the domain layer.

mod errors;
mod ids;
mod satisfaction;

pub use errors::ValidationError;
pub use ids::{ConversationId, GoalId};
pub use satisfaction::Satisfaction;
