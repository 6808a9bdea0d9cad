use std::io;

use thiserror::Error;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A navigation target could not be resolved.
    #[error("Invalid route: {0}")]
    Route(#[from] RouteError),
    /// The question bank failed validation.
    #[error("Invalid question bank: {0}")]
    Bank(#[from] BankError),
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure to turn a navigation target into a [`crate::Route`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("'{target}' is not a valid navigation target")]
    Malformed { target: String },
    #[error("no screen is mounted at '{path}'")]
    UnknownPath { path: String },
    #[error("'{target}' does not point at the results screen")]
    NotResults { target: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("a quiz needs at least one question")]
    Empty,
    #[error("question {number} has no options")]
    NoOptions { number: usize },
    #[error("question {number} lists '{option}' more than once")]
    DuplicateOption { number: usize, option: String },
    #[error("question {number}: correct answer '{correct}' is not one of its options")]
    CorrectNotAnOption { number: usize, correct: String },
}
