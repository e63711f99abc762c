//! Edited copies of a value: removal and replacement of matching elements.
//!
//! Both operations walk the original in pre-order, then apply the edits to a copy
//! in reverse walk order. Reverse pre-order reaches descendants before their
//! ancestors and later siblings before earlier ones, so every pending path stays
//! valid while list entries shift.
use crate::engine::traverse;
use crate::error::TraversalError;
use dataiter_predicate::Predicate;
use dataiter_types::DataValue;

/// Returns a copy of `value` with every matching element removed from its parent.
/// Returns `None` when the root itself matches.
pub fn remove_matching<P>(value: &DataValue, predicate: &P) -> Result<Option<DataValue>, TraversalError>
where
    P: Predicate + ?Sized,
{
    let paths = traverse(value, predicate)?.paths();
    if paths.iter().any(|p| p.is_root()) {
        log::debug!("Root matched; nothing left after removal");
        return Ok(None);
    }
    let mut copy = value.clone();
    for path in paths.iter().rev() {
        copy.remove_path(path);
    }
    log::debug!("Removed {} elements", paths.len());
    Ok(Some(copy))
}

/// Returns a copy of `value` with every matching element replaced by `f` applied to
/// it. Matches nested inside another match are transformed first, so `f` sees the
/// already transformed children.
pub fn transform_matching<P, F>(value: &DataValue, predicate: &P, mut f: F) -> Result<DataValue, TraversalError>
where
    P: Predicate + ?Sized,
    F: FnMut(&DataValue) -> DataValue,
{
    let paths = traverse(value, predicate)?.paths();
    let mut copy = value.clone();
    for path in paths.iter().rev() {
        if let Some(target) = copy.get_path_mut(path) {
            *target = f(target);
        }
    }
    log::debug!("Transformed {} elements", paths.len());
    Ok(copy)
}

/// Returns a copy of `value` with every matching element replaced by `replacement`.
pub fn replace_matching<P>(
    value: &DataValue,
    predicate: &P,
    replacement: &DataValue,
) -> Result<DataValue, TraversalError>
where
    P: Predicate + ?Sized,
{
    transform_matching(value, predicate, |_| replacement.clone())
}
