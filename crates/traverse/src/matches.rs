use dataiter_element::{DataElement, ElementId, ElementTree};
use dataiter_types::{DataPath, DataValue};

/// The result of a walk: the elements for which the predicate held, in the order
/// the walk tested them.
///
/// `Matches` owns the element tree built during the walk, so the matched elements
/// keep their parent links and can still report their paths.
#[derive(Debug, Clone)]
pub struct Matches<'v> {
    tree: ElementTree<'v>,
    ids: Vec<ElementId>,
}

impl<'v> Matches<'v> {
    pub(crate) fn new(tree: ElementTree<'v>, ids: Vec<ElementId>) -> Self {
        Self { tree, ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DataElement<'_, 'v>> {
        self.ids.get(index).and_then(|&id| self.tree.element(id))
    }

    pub fn first(&self) -> Option<DataElement<'_, 'v>> {
        self.get(0)
    }

    pub fn iter(&self) -> MatchesIter<'_, 'v> {
        MatchesIter {
            matches: self,
            position: 0,
        }
    }

    pub fn paths(&self) -> Vec<DataPath> {
        self.iter().map(|e| e.path()).collect()
    }

    pub fn values(&self) -> Vec<&'v DataValue> {
        self.iter().map(|e| e.value()).collect()
    }

    /// Number of elements the walk created, matched or not.
    pub fn visited(&self) -> usize {
        self.tree.len()
    }

    pub fn tree(&self) -> &ElementTree<'v> {
        &self.tree
    }
}

pub struct MatchesIter<'m, 'v> {
    matches: &'m Matches<'v>,
    position: usize,
}

impl<'m, 'v> Iterator for MatchesIter<'m, 'v> {
    type Item = DataElement<'m, 'v>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.matches.get(self.position)?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.matches.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MatchesIter<'_, '_> {}

impl<'m, 'v> IntoIterator for &'m Matches<'v> {
    type Item = DataElement<'m, 'v>;
    type IntoIter = MatchesIter<'m, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
