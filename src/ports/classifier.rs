//! User-act classifier port.

use crate::domain::goals::UserAct;

/// Port for classifying the user's latest reply.
///
/// The classification feeds tactic eligibility on the *next* turn:
/// friction tactics key off pushback and off-topic acts. Classifiers
/// must be total; when in doubt, return [`UserAct::Neutral`].
pub trait UserActClassifier: Send + Sync {
    /// Classifies a raw reply into a conversational act.
    fn classify(&self, reply: &str) -> UserAct;
}
