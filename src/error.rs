//! Error types for quiz operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// A shared link could not be turned back into a quiz.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("The shared quiz link is empty.")]
    Empty,

    #[error("The link does not contain a shared quiz.")]
    MissingData,

    #[error("The shared quiz link is invalid or corrupted.")]
    Corrupted(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to encode quiz: {0}")]
    Encode(String),
}

/// A draft quiz is not ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a quiz title")]
    MissingTitle,

    #[error("Please add at least one question")]
    NoQuestions,

    #[error("Please complete all questions and options")]
    IncompleteQuestions,

    #[error("Please mark a correct answer for every question")]
    InvalidCorrectAnswer,

    #[error("Please enter your name")]
    MissingName,
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Share(#[from] ShareError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Quiz not found: {0}")]
    NotFound(String),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingTitle.to_string(),
            "Please enter a quiz title"
        );
        assert_eq!(
            QuizError::from(ValidationError::NoQuestions).to_string(),
            "Please add at least one question"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = QuizError::NotFound("abc".into());
        assert_eq!(err.to_string(), "Quiz not found: abc");
    }
}
