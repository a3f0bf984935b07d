//! Error types
//!
//! The core is pure, so the taxonomy is narrow: bad options, a bad
//! substitute knowledge base, or a classifier that failed before the core ran.
//! Unresolved labels are not errors; they go through the fallback selector.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("classifier failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("invalid knowledge base: {0}")]
    KnowledgeBase(String),
}

/// Failure of the external image classifier
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    #[error("image rejected by classifier: {0}")]
    InvalidImage(String),
}

pub type Result<T> = std::result::Result<T, DiagnosisError>;
