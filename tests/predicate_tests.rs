mod common;

use common::{TestResult, fixtures::order_book, init_logging, path_strings};
use dataiter::predicates::{
    always_false, has_child, kind_is, name_equals, parent_matches, path_matches, try_from_fn,
    value_equals,
};
use dataiter::{
    DataValue, Error, PredicateError, PredicateExt, TraversalError, ValueKind, Walk,
    find_paths, find_paths_in_json, remove_matching, replace_matching, traverse,
};
use serde::Serialize;

#[test]
fn path_patterns_select_by_position() -> TestResult {
    init_logging();
    let value = DataValue::from_json_str(order_book())?;
    let ids = traverse(&value, &path_matches("/orders/*/id")?)?;
    assert_eq!(path_strings(&ids), vec!["/orders/0/id", "/orders/1/id", "/orders/2/id"]);

    let deep_tags = traverse(&value, &path_matches("/**/tags/+")?)?;
    assert_eq!(path_strings(&deep_tags), vec!["/orders/0/tags/0"]);
    Ok(())
}

#[test]
fn index_names_match_only_their_canonical_decimal_form() -> TestResult {
    let value = DataValue::from_json_str("[10, 20, 30, 40]")?;
    assert_eq!(path_strings(&traverse(&value, &name_equals("3"))?), vec!["/3"]);
    assert!(traverse(&value, &name_equals("03"))?.is_empty());
    assert!(traverse(&value, &name_equals("+3"))?.is_empty());
    assert!(traverse(&value, &path_matches("/03")?)?.is_empty());
    assert_eq!(path_strings(&traverse(&value, &path_matches("/3")?)?), vec!["/3"]);
    Ok(())
}

#[test]
fn composed_predicates_short_circuit_in_order() -> TestResult {
    let value = DataValue::from_json_str(order_book())?;
    let large_orders = name_equals("qty").and(value_equals(2));
    let matches = traverse(&value, &large_orders)?;
    assert_eq!(path_strings(&matches), vec!["/orders/0/qty", "/orders/2/qty"]);

    let no_tags = kind_is(ValueKind::Map)
        .and(parent_matches(name_equals("orders")))
        .and(has_child("tags").not());
    assert_eq!(path_strings(&traverse(&value, &no_tags)?), vec!["/orders/2"]);

    let either = name_equals("vip").or(name_equals("note"));
    assert_eq!(
        path_strings(&traverse(&value, &either)?),
        vec!["/customer/vip", "/orders/2/note"]
    );
    Ok(())
}

#[test]
fn null_members_exist_and_match_null() -> TestResult {
    let value = DataValue::from_json_str(order_book())?;
    let nulls = traverse(&value, &value_equals(DataValue::Null))?;
    assert_eq!(path_strings(&nulls), vec!["/orders/2/note"]);
    assert_eq!(path_strings(&traverse(&value, &has_child("note"))?), vec!["/orders/2"]);
    Ok(())
}

#[test]
fn failing_predicate_stops_the_walk() -> TestResult {
    let value = DataValue::from_json_str(order_book())?;
    let qty_must_be_int = try_from_fn(|e| {
        if e.name().is_some_and(|n| n.matches_literal("qty") || n.matches_literal("total")) {
            match e.value() {
                DataValue::Int(_) => Ok(true),
                other => Err(PredicateError::TypeMismatch {
                    expected: ValueKind::Int,
                    found: other.kind(),
                }),
            }
        } else if e.name().is_some_and(|n| n.matches_literal("name")) {
            Err(PredicateError::Failed {
                predicate: "qty_must_be_int".to_string(),
                message: "names are not allowed".to_string(),
            })
        } else {
            Ok(false)
        }
    });
    let err = traverse(&value, &qty_must_be_int).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Predicate failed at '/customer/name': Predicate 'qty_must_be_int' failed: names are not allowed"
    );
    assert!(matches!(err, TraversalError::Predicate { .. }));
    Ok(())
}

#[test]
fn walk_builder_counts_and_accumulates() -> TestResult {
    let value = DataValue::from_json_str(order_book())?;
    assert_eq!(Walk::over(&value).filter_by(name_equals("id")).count()?, 3);
    let quantities = Walk::over(&value)
        .filter_by(path_matches("/orders/*/qty")?)
        .accumulate_values()?;
    let total: i32 = quantities
        .iter()
        .filter_map(|v| match v {
            DataValue::Int(n) => Some(*n),
            _ => None,
        })
        .sum();
    assert_eq!(total, 5);
    assert_eq!(Walk::over(&value).filter_by(always_false()).count()?, 0);
    Ok(())
}

#[test]
fn removal_and_replacement_produce_copies() -> TestResult {
    let value = DataValue::from_json_str(order_book())?;
    let without_tags = remove_matching(&value, &name_equals("tags"))?.ok_or("root removed")?;
    assert!(traverse(&without_tags, &name_equals("tags"))?.is_empty());
    assert_eq!(traverse(&value, &name_equals("tags"))?.len(), 2);

    let redacted = replace_matching(&value, &name_equals("id"), &DataValue::from("?"))?;
    assert_eq!(Walk::over(&redacted).filter_by(value_equals("?")).count()?, 3);
    Ok(())
}

#[derive(Serialize)]
struct Invoice {
    number: u32,
    lines: Vec<Line>,
}

#[derive(Serialize)]
struct Line {
    sku: String,
    amount: i64,
}

#[test]
fn serializable_values_can_be_searched() -> TestResult {
    let invoice = Invoice {
        number: 7,
        lines: vec![
            Line { sku: "X".into(), amount: 10 },
            Line { sku: "Y".into(), amount: 10 },
        ],
    };
    // small integers convert to the 32-bit variant
    let paths = find_paths(&invoice, &value_equals(10))?;
    assert_eq!(common::paths_to_string(&paths), "/lines/0/amount:/lines/1/amount");
    assert!(find_paths(&invoice, &value_equals(10i64))?.is_empty());
    Ok(())
}

#[test]
fn malformed_json_surfaces_as_data_error() {
    let err = find_paths_in_json("{\"a\": [1,}", &value_equals(1)).unwrap_err();
    assert!(matches!(err, Error::Data(_)));
}

#[test]
fn predicate_failures_surface_as_traversal_errors() {
    let failing = try_from_fn(|_| {
        Err(PredicateError::Failed {
            predicate: "reject".into(),
            message: "always fails".into(),
        })
    });
    let err = find_paths_in_json("[1]", &failing).unwrap_err();
    assert!(matches!(err, Error::Traversal(TraversalError::Predicate { .. })));
}
