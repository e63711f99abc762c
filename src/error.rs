// src/error.rs
use dataiter_pattern::PatternError;
use dataiter_traverse::TraversalError;
use dataiter_types::DataError;
use thiserror::Error;

/// A single error type for callers that use the whole workspace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid data: {0}")]
    Data(#[from] DataError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Traversal failed: {0}")]
    Traversal(#[from] TraversalError),
}
