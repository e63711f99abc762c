use crate::compose::{And, Not, Or};
use crate::error::PredicateError;
use dataiter_element::DataElement;
use std::sync::Arc;

/// A pure boolean test applied to one element.
///
/// Implementations must not depend on mutable shared state: the same predicate may
/// be evaluated repeatedly, and from several threads at once, during walks over
/// different trees. A predicate that cannot decide returns an error, which aborts
/// the walk that asked.
pub trait Predicate: Send + Sync {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError>;
}

pub type BoxedPredicate = Box<dyn Predicate>;

impl<P: Predicate + ?Sized> Predicate for &P {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        (**self).evaluate(element)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        (**self).evaluate(element)
    }
}

impl<P: Predicate + ?Sized> Predicate for Arc<P> {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        (**self).evaluate(element)
    }
}

/// Combinator methods available on every owned predicate.
pub trait PredicateExt: Predicate + Sized + 'static {
    /// Both predicates must hold; `other` is skipped when `self` is false.
    fn and<P: Predicate + 'static>(self, other: P) -> And {
        And::new(vec![Box::new(self), Box::new(other)])
    }

    /// Either predicate must hold; `other` is skipped when `self` is true.
    fn or<P: Predicate + 'static>(self, other: P) -> Or {
        Or::new(vec![Box::new(self), Box::new(other)])
    }

    fn not(self) -> Not {
        Not::new(self)
    }

    fn boxed(self) -> BoxedPredicate {
        Box::new(self)
    }
}

impl<P: Predicate + 'static> PredicateExt for P {}
