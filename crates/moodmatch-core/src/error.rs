//! Core error types for moodmatch-core.
//!
//! This module defines the error hierarchy using thiserror. The three
//! quiz-session errors are the only ones the engine itself can raise;
//! the rest cover bank validation and config loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::quiz::bank::Category;

/// Core error type for moodmatch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Quiz session errors
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Question bank validation errors
    #[error("Bank error: {0}")]
    Bank(#[from] BankError),

    /// Bank configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors a quiz session can raise.
///
/// All three are local, programmer-detectable conditions; none require
/// retry or recovery. The presentation layer decides user-facing messaging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Requested a question beyond the bank's bounds (quiz already complete).
    #[error("Question index {index} out of range for bank of {len} questions")]
    OutOfRange { index: usize, len: usize },

    /// Submitted category is not offered by the current question.
    /// The answer is not recorded, the tally is unchanged, the index
    /// does not advance.
    #[error("Category '{category}' is not offered by question {question_id}")]
    InvalidSelection {
        category: Category,
        question_id: u32,
    },

    /// Finalize requested before all questions were answered.
    /// No partial or default result is ever returned.
    #[error("Quiz not complete: {answered} of {total} questions answered")]
    NotComplete { answered: usize, total: usize },
}

/// Question bank validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Bank contains no questions
    #[error("Question bank is empty")]
    Empty,

    /// A question offers the same category more than once
    #[error("Question {question_id} offers category '{category}' more than once")]
    DuplicateCategory {
        question_id: u32,
        category: Category,
    },

    /// A question omits a category from the closed set
    #[error("Question {question_id} is missing an option for category '{category}'")]
    MissingCategory {
        question_id: u32,
        category: Category,
    },

    /// Two questions share an id
    #[error("Duplicate question id {question_id}")]
    DuplicateQuestionId { question_id: u32 },
}

/// Bank-file configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a bank file
    #[error("Failed to load question bank from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse a bank file
    #[error("Failed to parse question bank: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
