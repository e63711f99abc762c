//! Shorthand constructors for the built-in predicates.
//!
//! ```ignore
//! use dataiter_predicate::predicates::{and, name_equals, value_equals};
//! let p = and(vec![name_equals("id").boxed(), value_equals("A").boxed()]);
//! ```
use crate::builtins::{
    AlwaysFalse, AlwaysTrue, HasChild, KindIs, NameEquals, ParentMatches, PathMatches, ValueEquals,
};
use crate::compose::{And, Not, Or};
use crate::error::PredicateError;
use crate::func::{FnPredicate, TryFnPredicate};
use crate::predicate::{BoxedPredicate, Predicate};
use dataiter_element::DataElement;
use dataiter_pattern::{PatternError, parse_pattern};
use dataiter_types::{DataValue, ValueKind};

pub fn value_equals(value: impl Into<DataValue>) -> ValueEquals {
    ValueEquals::new(value)
}

pub fn name_equals(name: impl Into<String>) -> NameEquals {
    NameEquals::new(name)
}

pub fn kind_is(kind: ValueKind) -> KindIs {
    KindIs::new(kind)
}

/// Parses `pattern` and matches element paths against it.
pub fn path_matches(pattern: &str) -> Result<PathMatches, PatternError> {
    parse_pattern(pattern).map(PathMatches::new)
}

pub fn parent_matches(inner: impl Predicate + 'static) -> ParentMatches {
    ParentMatches::new(inner)
}

pub fn has_child(key: impl Into<String>) -> HasChild {
    HasChild::new(key)
}

pub fn always_true() -> AlwaysTrue {
    AlwaysTrue
}

pub fn always_false() -> AlwaysFalse {
    AlwaysFalse
}

pub fn and(operands: Vec<BoxedPredicate>) -> And {
    And::new(operands)
}

pub fn or(operands: Vec<BoxedPredicate>) -> Or {
    Or::new(operands)
}

pub fn not(inner: impl Predicate + 'static) -> Not {
    Not::new(inner)
}

pub fn from_fn<F>(f: F) -> FnPredicate<F>
where
    F: Fn(&DataElement<'_, '_>) -> bool + Send + Sync,
{
    FnPredicate::new(f)
}

pub fn try_from_fn<F>(f: F) -> TryFnPredicate<F>
where
    F: Fn(&DataElement<'_, '_>) -> Result<bool, PredicateError> + Send + Sync,
{
    TryFnPredicate::new(f)
}
