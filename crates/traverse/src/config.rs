/// The order in which a walk tests an element relative to its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IterationOrder {
    /// An element is tested before any of its children.
    #[default]
    PreOrder,
    /// An element is tested after all of its children.
    PostOrder,
}

pub const DEFAULT_MAX_DEPTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Whether matches are reported parent-first or children-first. Within a
    /// parent, map entries are always visited in insertion order and list entries
    /// in index order.
    ///
    /// Defaults to [`IterationOrder::PreOrder`].
    pub order: IterationOrder,

    /// The deepest level the walk may descend to; the root is level 0. Reaching an
    /// element below this level fails the walk with
    /// [`TraversalError::DepthLimitExceeded`](crate::TraversalError::DepthLimitExceeded)
    /// rather than exhausting the stack.
    ///
    /// Defaults to `1024`.
    pub max_depth: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            order: IterationOrder::PreOrder,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
