//! Boolean tests over [`DataElement`]s and the combinators that compose them.
//!
//! Every predicate implements the single-method [`Predicate`] trait. The
//! [`predicates`] module offers constructor functions for the built-in kinds, and
//! [`PredicateExt`] adds `and`/`or`/`not` chaining to any predicate.
//!
//! [`DataElement`]: dataiter_element::DataElement

pub mod builtins;
pub mod compose;
pub mod error;
pub mod func;
pub mod predicate;
pub mod predicates;

pub use builtins::{
    AlwaysFalse, AlwaysTrue, HasChild, KindIs, NameEquals, ParentMatches, PathMatches, ValueEquals,
};
pub use compose::{And, Not, Or};
pub use error::PredicateError;
pub use func::{FnPredicate, TryFnPredicate};
pub use predicate::{BoxedPredicate, Predicate, PredicateExt};
