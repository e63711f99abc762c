use dataiter_predicate::PredicateError;
use dataiter_types::DataPath;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraversalError {
    #[error("Predicate failed at '{path}': {source}")]
    Predicate {
        path: DataPath,
        source: PredicateError,
    },

    #[error("Depth limit of {limit} exceeded at '{path}'")]
    DepthLimitExceeded { limit: usize, path: DataPath },
}
