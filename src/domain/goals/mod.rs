//! Goal graph and conversation state.
//!
//! Represents where a conversation stands: which goals are complete,
//! what evidence has been gathered, and how the user is responding.
//! This layer is a passive value type; transitions live in tactics.

mod goal;
mod state;
mod user_act;

pub use goal::Goal;
pub use state::{
    ConversationState, DIAGNOSE_INTENT, IMPROVE_CLARITY, PROPOSE_PLAN, SECURE_COMMIT,
};
pub use user_act::UserAct;
