//! User-act classification adapters.

mod keyword;

pub use keyword::KeywordClassifier;
