//! The built-in predicates. None of them can fail.
use crate::error::PredicateError;
use crate::predicate::{BoxedPredicate, Predicate};
use dataiter_element::DataElement;
use dataiter_pattern::PathPattern;
use dataiter_types::{DataValue, ValueKind};

/// Holds when the element's value equals the stored value.
///
/// Equality is [`DataValue`]'s: deep for maps and lists, exact for scalars, and
/// never across numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEquals {
    value: DataValue,
}

impl ValueEquals {
    pub fn new(value: impl Into<DataValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &DataValue {
        &self.value
    }
}

impl Predicate for ValueEquals {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(element.value() == &self.value)
    }
}

/// Holds when the element's key, or the decimal form of its index, equals `name`.
/// The root has no name and never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEquals {
    name: String,
}

impl NameEquals {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Predicate for NameEquals {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(element
            .name()
            .is_some_and(|name| name.matches_literal(&self.name)))
    }
}

/// Type check on the element's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindIs {
    kind: ValueKind,
}

impl KindIs {
    pub fn new(kind: ValueKind) -> Self {
        Self { kind }
    }
}

impl Predicate for KindIs {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(element.kind() == self.kind)
    }
}

/// Holds when the element's path from the root matches a [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatches {
    pattern: PathPattern,
}

impl PathMatches {
    pub fn new(pattern: PathPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }
}

impl Predicate for PathMatches {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(self.pattern.matches(&element.path()))
    }
}

/// Holds when the element has a parent and the inner predicate holds for it.
pub struct ParentMatches {
    inner: BoxedPredicate,
}

impl ParentMatches {
    pub fn new(inner: impl Predicate + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Predicate for ParentMatches {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        match element.parent() {
            Some(parent) => self.inner.evaluate(&parent),
            None => Ok(false),
        }
    }
}

/// Existence check: holds when the element is a map with an entry for `key`,
/// including entries whose value is `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasChild {
    key: String,
}

impl HasChild {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Predicate for HasChild {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(element
            .value()
            .as_map()
            .is_some_and(|map| map.contains_key(&self.key)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysTrue;

impl Predicate for AlwaysTrue {
    fn evaluate(&self, _element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl Predicate for AlwaysFalse {
    fn evaluate(&self, _element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(false)
    }
}
