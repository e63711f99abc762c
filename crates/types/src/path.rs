//! Owned paths that address a value inside a [`DataValue`] tree.
use crate::value::DataValue;
use std::fmt;

/// One step in a [`DataPath`]: a map key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Compares the segment against a textual name. Keys compare as strings,
    /// indices compare by their decimal rendering.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            PathSegment::Key(key) => key == literal,
            PathSegment::Index(index) => index.to_string() == literal,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// The sequence of names leading from the root to an element. The root path is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataPath(Vec<PathSegment>);

impl DataPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// The path of the enclosing element, or `None` for the root.
    pub fn parent(&self) -> Option<DataPath> {
        self.0.split_last().map(|(_, rest)| Self(rest.to_vec()))
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for DataPath {
    fn from_iter<T: IntoIterator<Item = PathSegment>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DataPath {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl DataValue {
    /// Looks up the value a path points at.
    pub fn get_path(&self, path: &DataPath) -> Option<&DataValue> {
        path.segments()
            .iter()
            .try_fold(self, |current, segment| current.child(segment))
    }

    pub fn get_path_mut(&mut self, path: &DataPath) -> Option<&mut DataValue> {
        let mut current = self;
        for segment in path.segments() {
            current = match (current, segment) {
                (DataValue::Map(map), PathSegment::Key(key)) => map.get_mut(key)?,
                (DataValue::List(list), PathSegment::Index(index)) => list.get_mut(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Detaches the value at `path` from its parent and returns it. Map entries keep
    /// the order of their remaining siblings; list entries after it shift down.
    /// The root cannot be removed.
    pub fn remove_path(&mut self, path: &DataPath) -> Option<DataValue> {
        let (last, parent_segments) = path.segments().split_last()?;
        let parent = self.get_path_mut(&DataPath(parent_segments.to_vec()))?;
        match (parent, last) {
            (DataValue::Map(map), PathSegment::Key(key)) => map.shift_remove(key),
            (DataValue::List(list), PathSegment::Index(index)) if *index < list.len() => {
                Some(list.remove(*index))
            }
            _ => None,
        }
    }

    fn child(&self, segment: &PathSegment) -> Option<&DataValue> {
        match (self, segment) {
            (DataValue::Map(map), PathSegment::Key(key)) => map.get(key),
            (DataValue::List(list), PathSegment::Index(index)) => list.get(*index),
            _ => None,
        }
    }
}
