use dataiter_types::ValueKind;
use thiserror::Error;

/// Raised by predicates that cannot decide on an element. Built-in predicates never
/// fail; this is for caller-supplied ones.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredicateError {
    #[error("Type error: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },

    #[error("Predicate '{predicate}' failed: {message}")]
    Failed { predicate: String, message: String },
}
