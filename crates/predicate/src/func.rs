//! Adapters that turn closures into predicates.
use crate::error::PredicateError;
use crate::predicate::Predicate;
use dataiter_element::DataElement;

/// A predicate backed by an infallible closure.
pub struct FnPredicate<F> {
    f: F,
}

impl<F> FnPredicate<F>
where
    F: Fn(&DataElement<'_, '_>) -> bool + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&DataElement<'_, '_>) -> bool + Send + Sync,
{
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok((self.f)(element))
    }
}

/// A predicate backed by a closure that may fail.
pub struct TryFnPredicate<F> {
    f: F,
}

impl<F> TryFnPredicate<F>
where
    F: Fn(&DataElement<'_, '_>) -> Result<bool, PredicateError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Predicate for TryFnPredicate<F>
where
    F: Fn(&DataElement<'_, '_>) -> Result<bool, PredicateError> + Send + Sync,
{
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        (self.f)(element)
    }
}
