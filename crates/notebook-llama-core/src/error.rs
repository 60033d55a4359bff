//! Error types for validation and storage state.

use thiserror::Error;

use crate::conversation::Speaker;

/// A structured payload that violates one of its construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must contain at least {min} items, got {actual}")]
    TooFew {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must contain at most {max} items, got {actual}")]
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("questions and answers must have the same length, got {questions} questions and {answers} answers")]
    QuestionAnswerMismatch { questions: usize, answers: usize },

    #[error("There are non-existing nodes listed as source or target in the edges")]
    DanglingEdges,

    #[error("Conversation must start with speaker1")]
    MustStartWithSpeaker1,

    #[error("Conversation must be an alternance between speaker1 and speaker2 (turn {index} is {found})")]
    BrokenAlternation { index: usize, found: Speaker },
}

/// Misuse of a document store's connection lifecycle or naming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Engine was never connected!")]
    NeverConnected,

    #[error("invalid table name '{0}': use letters, digits and underscores, not starting with a digit")]
    InvalidTableName(String),
}

/// Checks a collection length against an inclusive lower bound.
pub(crate) fn check_min(field: &'static str, actual: usize, min: usize) -> Result<(), ValidationError> {
    if actual < min {
        return Err(ValidationError::TooFew { field, min, actual });
    }
    Ok(())
}

/// Checks a collection length against an inclusive upper bound.
pub(crate) fn check_max(field: &'static str, actual: usize, max: usize) -> Result<(), ValidationError> {
    if actual > max {
        return Err(ValidationError::TooMany { field, max, actual });
    }
    Ok(())
}
