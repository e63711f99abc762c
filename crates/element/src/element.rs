use crate::tree::{ElementId, ElementTree};
use dataiter_types::{DataPath, DataValue, PathSegment, ValueKind};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The position of an element inside its parent: a key under a map, an index
/// under a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Name<'v> {
    Key(&'v str),
    Index(usize),
}

impl Name<'_> {
    pub fn to_segment(&self) -> PathSegment {
        match self {
            Name::Key(key) => PathSegment::Key((*key).to_string()),
            Name::Index(index) => PathSegment::Index(*index),
        }
    }

    /// Keys compare as strings, indices by their decimal rendering.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            Name::Key(key) => *key == literal,
            Name::Index(index) => index.to_string() == literal,
        }
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Key(key) => f.write_str(key),
            Name::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A node in a dynamically typed tree: its value, its name within the parent and
/// a link to the parent.
///
/// This is a cheap `Copy` handle; the element data lives in the [`ElementTree`].
/// `'t` is the lifetime of the tree, `'v` the lifetime of the underlying value.
#[derive(Clone, Copy)]
pub struct DataElement<'t, 'v> {
    tree: &'t ElementTree<'v>,
    id: ElementId,
}

impl<'t, 'v> DataElement<'t, 'v> {
    pub(crate) fn new(tree: &'t ElementTree<'v>, id: ElementId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tree(&self) -> &'t ElementTree<'v> {
        self.tree
    }

    /// The wrapped value.
    pub fn value(&self) -> &'v DataValue {
        self.tree.node(self.id).value
    }

    /// The key or index of this element within its parent; `None` for the root.
    pub fn name(&self) -> Option<Name<'v>> {
        self.tree.node(self.id).name
    }

    /// The enclosing element; `None` for the root.
    pub fn parent(&self) -> Option<DataElement<'t, 'v>> {
        self.tree
            .node(self.id)
            .parent
            .map(|parent| DataElement::new(self.tree, parent))
    }

    /// Distance from the root, which is at level 0.
    pub fn level(&self) -> usize {
        self.tree.node(self.id).level
    }

    pub fn kind(&self) -> ValueKind {
        self.value().kind()
    }

    pub fn is_root(&self) -> bool {
        self.tree.node(self.id).parent.is_none()
    }

    /// Iterates over the enclosing elements, nearest first.
    pub fn ancestors(&self) -> Ancestors<'t, 'v> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// The names from the root down to this element. Empty for the root.
    pub fn path(&self) -> DataPath {
        let mut segments = Vec::with_capacity(self.level());
        let mut current = Some(*self);
        while let Some(element) = current {
            if let Some(name) = element.name() {
                segments.push(name.to_segment());
            }
            current = element.parent();
        }
        segments.reverse();
        DataPath::new(segments)
    }

    pub fn path_string(&self) -> String {
        self.path().to_string()
    }
}

impl PartialEq for DataElement<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for DataElement<'_, '_> {}

impl Hash for DataElement<'_, '_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for DataElement<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataElement")
            .field("path", &self.path_string())
            .field("kind", &self.kind())
            .finish()
    }
}

/// Iterator returned by [`DataElement::ancestors`].
pub struct Ancestors<'t, 'v> {
    next: Option<DataElement<'t, 'v>>,
}

impl<'t, 'v> Iterator for Ancestors<'t, 'v> {
    type Item = DataElement<'t, 'v>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
