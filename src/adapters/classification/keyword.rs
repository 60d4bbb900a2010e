//! Keyword-marker user-act classifier.

use crate::domain::goals::UserAct;
use crate::ports::UserActClassifier;

/// Objection signals. Checked before off-topic markers: a reply that
/// objects while changing subject is still an objection.
const PUSHBACK_MARKERS: &[&str] = &[
    "too expensive",
    "too much",
    "not interested",
    "not convinced",
    "i disagree",
    "don't think so",
    "doesn't work for me",
    "won't work",
    "that's not",
    "no, ",
    "no thanks",
];

/// Subject-change signals.
const OFFTOPIC_MARKERS: &[&str] = &[
    "by the way",
    "off topic",
    "off-topic",
    "unrelated",
    "speaking of",
    "random question",
    "changing the subject",
    "before i forget",
];

/// Keyword-marker implementation of [`UserActClassifier`].
///
/// Anything that matches neither marker set is neutral, which is the
/// safe default: goal tactics stay eligible and the conversation moves.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Creates a new keyword classifier.
    pub fn new() -> Self {
        Self
    }
}

impl UserActClassifier for KeywordClassifier {
    fn classify(&self, reply: &str) -> UserAct {
        let lower = reply.to_ascii_lowercase();
        if PUSHBACK_MARKERS.iter().any(|m| lower.contains(m)) {
            UserAct::Pushback
        } else if OFFTOPIC_MARKERS.iter().any(|m| lower.contains(m)) {
            UserAct::Offtopic
        } else {
            UserAct::Neutral
        }
    }
}
