//! Logical composition. Operands are evaluated left to right and evaluation stops
//! at the first operand that decides the result or returns an error.
use crate::error::PredicateError;
use crate::predicate::{BoxedPredicate, Predicate};
use dataiter_element::DataElement;

/// Holds when every operand holds. An empty `And` is true.
pub struct And {
    operands: Vec<BoxedPredicate>,
}

impl And {
    pub fn new(operands: Vec<BoxedPredicate>) -> Self {
        Self { operands }
    }

    pub fn push(mut self, operand: impl Predicate + 'static) -> Self {
        self.operands.push(Box::new(operand));
        self
    }
}

impl Predicate for And {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        for operand in &self.operands {
            if !operand.evaluate(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Holds when any operand holds. An empty `Or` is false.
pub struct Or {
    operands: Vec<BoxedPredicate>,
}

impl Or {
    pub fn new(operands: Vec<BoxedPredicate>) -> Self {
        Self { operands }
    }

    pub fn push(mut self, operand: impl Predicate + 'static) -> Self {
        self.operands.push(Box::new(operand));
        self
    }
}

impl Predicate for Or {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        for operand in &self.operands {
            if operand.evaluate(element)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

pub struct Not {
    inner: BoxedPredicate,
}

impl Not {
    pub fn new(inner: impl Predicate + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Predicate for Not {
    fn evaluate(&self, element: &DataElement<'_, '_>) -> Result<bool, PredicateError> {
        Ok(!self.inner.evaluate(element)?)
    }
}
