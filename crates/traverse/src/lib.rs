//! Depth-first traversal of a [`DataValue`] tree, collecting the elements for which
//! a [`Predicate`] holds.
//!
//! [`traverse`] is the plain entry point. [`Walk`] is a builder over the same engine
//! that also counts, accumulates values and visits matches. [`remove_matching`] and
//! [`transform_matching`] produce edited copies of a value.
//!
//! [`DataValue`]: dataiter_types::DataValue
//! [`Predicate`]: dataiter_predicate::Predicate

pub mod config;
pub mod edit;
pub mod engine;
pub mod error;
pub mod matches;
pub mod walk;

pub use config::{DEFAULT_MAX_DEPTH, IterationOrder, TraversalConfig};
pub use edit::{remove_matching, replace_matching, transform_matching};
pub use engine::{traverse, traverse_with};
pub use error::TraversalError;
pub use matches::{Matches, MatchesIter};
pub use walk::Walk;
