//! Depth-first traversal and predicate matching over dynamically typed data trees.
//!
//! A [`DataValue`] is a map, a list or a scalar. Walking it produces
//! [`DataElement`]s that know their name within the parent and link back to it, so
//! every match can report its full [`DataPath`]. Matching is driven by the
//! [`Predicate`] trait; see [`predicates`] for the built-in kinds.
//!
//! ```ignore
//! use dataiter::{DataValue, predicates::value_equals, traverse};
//!
//! let value = DataValue::from_json_str("[1, 2, 1]")?;
//! let matches = traverse(&value, &value_equals(1))?;
//! assert_eq!(matches.paths()[1].to_string(), "/2");
//! ```

pub mod error;

pub use dataiter_element::{Ancestors, DataElement, ElementId, ElementTree, Name};
pub use dataiter_pattern::{PathPattern, PatternComponent, PatternError, Wildcard, parse_pattern};
pub use dataiter_predicate::{
    AlwaysFalse, AlwaysTrue, And, BoxedPredicate, FnPredicate, HasChild, KindIs, NameEquals, Not,
    Or, ParentMatches, PathMatches, Predicate, PredicateError, PredicateExt, TryFnPredicate,
    ValueEquals, predicates,
};
pub use dataiter_traverse::{
    DEFAULT_MAX_DEPTH, IterationOrder, Matches, MatchesIter, TraversalConfig, TraversalError, Walk,
    remove_matching, replace_matching, transform_matching, traverse, traverse_with,
};
pub use dataiter_types::{
    DataError, DataList, DataMap, DataPath, DataValue, PathSegment, ValueKind, objects_from_str,
};
pub use error::Error;

use serde::Serialize;

/// Converts any serializable value and returns the paths of the elements that match.
pub fn find_paths<T, P>(value: &T, predicate: &P) -> Result<Vec<DataPath>, Error>
where
    T: Serialize + ?Sized,
    P: Predicate + ?Sized,
{
    let data = DataValue::from_serializable(value)?;
    let paths = traverse(&data, predicate)?.paths();
    log::debug!("Found {} matching paths", paths.len());
    Ok(paths)
}

/// Parses a JSON document and returns the paths of the elements that match.
pub fn find_paths_in_json<P>(json: &str, predicate: &P) -> Result<Vec<DataPath>, Error>
where
    P: Predicate + ?Sized,
{
    let data = DataValue::from_json_str(json)?;
    Ok(traverse(&data, predicate)?.paths())
}
