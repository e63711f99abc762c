//! A builder over the traversal engine.
use crate::config::{IterationOrder, TraversalConfig};
use crate::engine::traverse_with;
use crate::error::TraversalError;
use crate::matches::Matches;
use dataiter_element::DataElement;
use dataiter_predicate::{AlwaysTrue, And, BoxedPredicate, Predicate};
use dataiter_types::DataValue;

/// Configures and runs walks over one value.
///
/// ```ignore
/// let ids = Walk::over(&value)
///     .filter_by(name_equals("id"))
///     .accumulate_values()?;
/// ```
///
/// Without a filter every element matches. Repeated `filter_by` calls combine
/// with `and`, in call order.
pub struct Walk<'v> {
    root: &'v DataValue,
    config: TraversalConfig,
    filter: Option<BoxedPredicate>,
}

impl<'v> Walk<'v> {
    pub fn over(root: &'v DataValue) -> Self {
        Self {
            root,
            config: TraversalConfig::default(),
            filter: None,
        }
    }

    pub fn order(mut self, order: IterationOrder) -> Self {
        self.config.order = order;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn config(mut self, config: TraversalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn filter_by(mut self, predicate: impl Predicate + 'static) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Box::new(And::new(vec![existing, Box::new(predicate)])),
            None => Box::new(predicate),
        });
        self
    }

    /// Runs the walk and returns the matching elements.
    pub fn collect(&self) -> Result<Matches<'v>, TraversalError> {
        match &self.filter {
            Some(filter) => traverse_with(self.root, filter, &self.config),
            None => traverse_with(self.root, &AlwaysTrue, &self.config),
        }
    }

    pub fn count(&self) -> Result<usize, TraversalError> {
        Ok(self.collect()?.len())
    }

    /// The values of the matching elements, in walk order.
    pub fn accumulate_values(&self) -> Result<Vec<&'v DataValue>, TraversalError> {
        Ok(self.collect()?.values())
    }

    /// Calls `f` for each matching element, in walk order. The walk completes
    /// before the first call, so a predicate error means `f` is never called.
    pub fn for_each<F>(&self, mut f: F) -> Result<(), TraversalError>
    where
        F: FnMut(DataElement<'_, 'v>),
    {
        let matches = self.collect()?;
        for element in &matches {
            f(element);
        }
        Ok(())
    }
}
