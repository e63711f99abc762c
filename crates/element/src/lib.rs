//! Defines the navigable, read-only view of a [`DataValue`] tree.
//!
//! A [`DataElement`] is a lightweight handle into an [`ElementTree`]. The tree is an
//! arena: every element stores the index of its parent, so paths and ancestor
//! chains can be recovered without the element owning or copying the data.
//!
//! [`DataValue`]: dataiter_types::DataValue
pub mod element;
pub mod tree;

pub use element::{Ancestors, DataElement, Name};
pub use tree::{ElementId, ElementTree};
