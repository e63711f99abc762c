use crate::element::{DataElement, Name};
use dataiter_types::DataValue;

/// Index of an element inside its [`ElementTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// The root is always the first element of a tree.
    pub const ROOT: ElementId = ElementId(0);

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<'v> {
    pub(crate) value: &'v DataValue,
    pub(crate) name: Option<Name<'v>>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) level: usize,
}

/// An arena of elements over a borrowed [`DataValue`].
///
/// A tree starts out holding only its root; child elements are appended with
/// [`ElementTree::push_child`] as a walk descends, so an element is always created
/// after its parent. Elements are never modified once pushed.
///
/// `'v` is the lifetime of the underlying value.
#[derive(Debug, Clone)]
pub struct ElementTree<'v> {
    nodes: Vec<Node<'v>>,
}

impl<'v> ElementTree<'v> {
    /// Creates a tree whose only element is the root, which has no name and no parent.
    pub fn new(root: &'v DataValue) -> Self {
        Self {
            nodes: vec![Node {
                value: root,
                name: None,
                parent: None,
                level: 0,
            }],
        }
    }

    pub fn root(&self) -> DataElement<'_, 'v> {
        DataElement::new(self, ElementId::ROOT)
    }

    pub fn element(&self, id: ElementId) -> Option<DataElement<'_, 'v>> {
        (id.0 < self.nodes.len()).then(|| DataElement::new(self, id))
    }

    /// Appends a child of `parent` named `name` and returns its id, or `None` if
    /// `parent` is not an element of this tree.
    pub fn push_child(&mut self, parent: ElementId, name: Name<'v>, value: &'v DataValue) -> Option<ElementId> {
        let level = self.nodes.get(parent.0)?.level + 1;
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            value,
            name: Some(name),
            parent: Some(parent),
            level,
        });
        Some(id)
    }

    /// The number of elements created so far, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All elements in creation order.
    pub fn iter(&self) -> impl Iterator<Item = DataElement<'_, 'v>> + '_ {
        (0..self.nodes.len()).map(move |i| DataElement::new(self, ElementId(i)))
    }

    pub(crate) fn node(&self, id: ElementId) -> &Node<'v> {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_holds_only_the_root() {
        let value = DataValue::Int(3);
        let tree = ElementTree::new(&value);
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_root());
        assert!(tree.element(ElementId(1)).is_none());
    }

    #[test]
    fn children_record_parent_and_level() {
        let value = DataValue::from_json_str(r#"{"a": [true]}"#).unwrap();
        let map = value.as_map().unwrap();
        let mut tree = ElementTree::new(&value);
        let a = tree.push_child(ElementId::ROOT, Name::Key("a"), &map["a"]).unwrap();
        let list = map["a"].as_list().unwrap();
        let first = tree.push_child(a, Name::Index(0), &list[0]).unwrap();

        let element = tree.element(first).unwrap();
        assert_eq!(element.level(), 2);
        assert_eq!(element.parent().unwrap().id(), a);
        assert_eq!(element.value(), &DataValue::Boolean(true));
        assert_eq!(tree.iter().count(), 3);
    }

    #[test]
    fn push_child_rejects_foreign_parent() {
        let value = DataValue::from_json_str("[1]").unwrap();
        let mut tree = ElementTree::new(&value);
        assert!(tree.push_child(ElementId(5), Name::Index(0), &value).is_none());
        assert_eq!(tree.len(), 1);
    }
}
