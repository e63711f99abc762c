//! The depth-first walk behind every traversal.
use crate::config::{IterationOrder, TraversalConfig};
use crate::error::TraversalError;
use crate::matches::Matches;
use dataiter_element::{ElementId, ElementTree, Name};
use dataiter_predicate::Predicate;
use dataiter_types::DataValue;

/// Walks `root` in pre-order and returns every element for which `predicate` holds.
pub fn traverse<'v, P>(root: &'v DataValue, predicate: &P) -> Result<Matches<'v>, TraversalError>
where
    P: Predicate + ?Sized,
{
    traverse_with(root, predicate, &TraversalConfig::default())
}

/// Like [`traverse`], with an explicit order and depth limit.
///
/// The first predicate error aborts the walk; no partial result is returned.
pub fn traverse_with<'v, P>(
    root: &'v DataValue,
    predicate: &P,
    config: &TraversalConfig,
) -> Result<Matches<'v>, TraversalError>
where
    P: Predicate + ?Sized,
{
    log::debug!(
        "Starting {:?} walk over {} value (max depth {})",
        config.order,
        root.kind(),
        config.max_depth
    );
    let mut walker = Walker {
        tree: ElementTree::new(root),
        predicate,
        config,
        matched: Vec::new(),
    };
    walker.visit(ElementId::ROOT, root, 0)?;
    log::debug!(
        "Walk complete: {} elements visited, {} matched",
        walker.tree.len(),
        walker.matched.len()
    );
    Ok(Matches::new(walker.tree, walker.matched))
}

struct Walker<'v, 'p, P: ?Sized> {
    tree: ElementTree<'v>,
    predicate: &'p P,
    config: &'p TraversalConfig,
    matched: Vec<ElementId>,
}

impl<'v, P: Predicate + ?Sized> Walker<'v, '_, P> {
    fn visit(&mut self, id: ElementId, value: &'v DataValue, level: usize) -> Result<(), TraversalError> {
        if self.config.order == IterationOrder::PreOrder {
            self.test(id)?;
        }
        match value {
            DataValue::Map(map) => {
                for (key, child) in map {
                    self.descend(id, Name::Key(key), child, level + 1)?;
                }
            }
            DataValue::List(list) => {
                for (index, child) in list.iter().enumerate() {
                    self.descend(id, Name::Index(index), child, level + 1)?;
                }
            }
            _ => {}
        }
        if self.config.order == IterationOrder::PostOrder {
            self.test(id)?;
        }
        Ok(())
    }

    fn descend(
        &mut self,
        parent: ElementId,
        name: Name<'v>,
        value: &'v DataValue,
        level: usize,
    ) -> Result<(), TraversalError> {
        if level > self.config.max_depth {
            let parent_path = self.tree.element(parent).map(|p| p.path()).unwrap_or_default();
            return Err(TraversalError::DepthLimitExceeded {
                limit: self.config.max_depth,
                path: parent_path.child(name.to_segment()),
            });
        }
        match self.tree.push_child(parent, name, value) {
            Some(id) => self.visit(id, value, level),
            None => Ok(()),
        }
    }

    fn test(&mut self, id: ElementId) -> Result<(), TraversalError> {
        let Some(element) = self.tree.element(id) else {
            return Ok(());
        };
        let matched = self
            .predicate
            .evaluate(&element)
            .map_err(|source| TraversalError::Predicate {
                path: element.path(),
                source,
            })?;
        if matched {
            log::trace!("Matched element at {}", element.path_string());
            self.matched.push(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataiter_predicate::predicates::{always_true, try_from_fn, value_equals};
    use dataiter_predicate::PredicateError;
    use dataiter_types::{DataPath, PathSegment};

    fn json(s: &str) -> DataValue {
        DataValue::from_json_str(s).unwrap()
    }

    #[test]
    fn pre_order_visits_parent_before_children() {
        let value = json(r#"{"a": {"b": 1}, "c": [2, 3]}"#);
        let matches = traverse(&value, &always_true()).unwrap();
        let paths: Vec<String> = matches.iter().map(|e| e.path_string()).collect();
        assert_eq!(paths, vec!["/", "/a", "/a/b", "/c", "/c/0", "/c/1"]);
    }

    #[test]
    fn post_order_visits_children_before_parent() {
        let value = json(r#"{"a": {"b": 1}, "c": [2, 3]}"#);
        let config = TraversalConfig {
            order: IterationOrder::PostOrder,
            ..TraversalConfig::default()
        };
        let matches = traverse_with(&value, &always_true(), &config).unwrap();
        let paths: Vec<String> = matches.iter().map(|e| e.path_string()).collect();
        assert_eq!(paths, vec!["/a/b", "/a", "/c/0", "/c/1", "/c", "/"]);
    }

    #[test]
    fn depth_limit_reports_offending_path() {
        let value = json(r#"{"a": {"b": {"c": 1}}}"#);
        let config = TraversalConfig {
            max_depth: 2,
            ..TraversalConfig::default()
        };
        let err = traverse_with(&value, &always_true(), &config).unwrap_err();
        assert_eq!(
            err,
            TraversalError::DepthLimitExceeded {
                limit: 2,
                path: DataPath::new(vec!["a".into(), "b".into(), "c".into()]),
            }
        );
    }

    #[test]
    fn depth_limit_allows_elements_at_the_limit() {
        let value = json(r#"{"a": {"b": 1}}"#);
        let config = TraversalConfig {
            max_depth: 2,
            ..TraversalConfig::default()
        };
        assert_eq!(traverse_with(&value, &always_true(), &config).unwrap().len(), 3);
    }

    #[test]
    fn predicate_errors_abort_the_walk() {
        let value = json(r#"[1, "two", 3]"#);
        let only_ints = try_from_fn(|e| match e.value() {
            DataValue::Int(n) => Ok(*n > 0),
            DataValue::List(_) => Ok(false),
            other => Err(PredicateError::TypeMismatch {
                expected: dataiter_types::ValueKind::Int,
                found: other.kind(),
            }),
        });
        let err = traverse(&value, &only_ints).unwrap_err();
        match err {
            TraversalError::Predicate { path, .. } => {
                assert_eq!(path, DataPath::new(vec![PathSegment::Index(1)]));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn visited_count_covers_the_whole_tree() {
        let value = json(r#"{"a": [1, 2, {"b": null}]}"#);
        let matches = traverse(&value, &value_equals(DataValue::Null)).unwrap();
        assert_eq!(matches.visited(), 6);
        assert_eq!(matches.len(), 1);
    }
}
