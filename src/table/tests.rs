//! Tests for the table module

use super::text::parse_table;
use super::*;

#[test]
fn test_conditions_default_output() {
    let mut cond = Conditions::new();
    cond.add(Row::implicit(&[true, true]));

    let table = ConditionTable::from_conditions(&cond).unwrap();
    let outputs: Vec<&OutputValue> = table.outputs().collect();
    assert_eq!(outputs, vec![&OutputValue::Bool(true)]);
    assert_eq!(table.arity(&OutputValue::Bool(true)), Some(2));
}

#[test]
fn test_on_set_drops_false_rows() {
    let mut cond = Conditions::new();
    cond.add(Row::explicit(&[true, false], true));
    cond.add(Row::implicit(&[false, true]));
    cond.add(Row::explicit(&[true, true], false));

    let table = ConditionTable::from_conditions(&cond).unwrap();
    let on_set = table.on_set(&OutputValue::Bool(true));

    let patterns: Vec<String> = on_set.iter().map(|m| m.pattern()).collect();
    assert_eq!(patterns, vec!["01", "10"]);
}

#[test]
fn test_duplicate_rows_are_harmless() {
    let mut cond = Conditions::new();
    cond.add(Row::explicit(&[true, true], true));
    cond.add(Row::implicit(&[true, true]));
    cond.add(Row::explicit(&[true, true], true));

    let table = ConditionTable::from_conditions(&cond).unwrap();
    assert_eq!(table.on_set(&OutputValue::Bool(true)).len(), 1);
}

#[test]
fn test_arity_mismatch_rejected() {
    let mut cond = Conditions::new();
    cond.add(Row::implicit(&[true, true]));
    cond.add(Row::implicit(&[true, true, false]));

    let err = ConditionTable::from_conditions(&cond).unwrap_err();
    assert_eq!(
        err,
        TableError::ArityMismatch {
            output: OutputValue::Bool(true),
            expected: 2,
            found: 3,
        }
    );
}

#[test]
fn test_empty_row_rejected() {
    let mut cond = Conditions::new();
    cond.add(Row::implicit(&[]));

    let err = ConditionTable::from_conditions(&cond).unwrap_err();
    assert_eq!(
        err,
        TableError::EmptyRow {
            output: OutputValue::Bool(true),
        }
    );
}

#[test]
fn test_contradiction_rejected() {
    let mut cond = Conditions::new();
    cond.add(Row::explicit(&[true, true], true));
    cond.add(Row::explicit(&[true, true], false));

    let err = ConditionTable::from_conditions(&cond).unwrap_err();
    assert_eq!(
        err,
        TableError::Contradiction {
            output: OutputValue::Bool(true),
            pattern: std::sync::Arc::from("11"),
        }
    );
}

#[test]
fn test_implicit_against_explicit_contradiction() {
    // An implicit row asserts true; an explicit false row for the same
    // combination contradicts it
    let mut cond = Conditions::new();
    cond.add(Row::implicit(&[false, true]));
    cond.add(Row::explicit(&[false, true], false));

    let err = ConditionTable::from_conditions(&cond).unwrap_err();
    assert!(err.is_contradiction());
}

#[test]
fn test_outputs_are_independent() {
    let mut cond = Conditions::new();
    cond.add(Row::explicit(&[true, true], true));
    cond.add_for(OutputValue::literal("3"), Row::explicit(&[true, true], false));

    // Same combination, different outputs: no contradiction
    let table = ConditionTable::from_conditions(&cond).unwrap();
    assert_eq!(table.num_outputs(), 2);
}

#[test]
fn test_identifiers_plain_table() {
    let mut cond = Conditions::new();
    cond.add(Row::implicit(&[true, false]));

    let table = ConditionTable::from_conditions(&cond).unwrap();
    let names = table
        .identifiers(&OutputValue::Bool(true), &["a", "b"])
        .unwrap();
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    assert_eq!(names, vec!["a", "b"]);

    // Plain tables require one name per position
    let err = table
        .identifiers(&OutputValue::Bool(true), &["a"])
        .unwrap_err();
    assert!(matches!(err, TableError::IdentifierCountMismatch { .. }));
}

#[test]
fn test_identifiers_guarded_table() {
    let mut cond = Conditions::new();
    cond.add(Row::guarded(
        vec![Slot::Bound(true), Slot::guard("count > 3")],
        true,
    ));

    let table = ConditionTable::from_conditions(&cond).unwrap();
    let names = table
        .identifiers(&OutputValue::Bool(true), &["alive"])
        .unwrap();
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    assert_eq!(names, vec!["alive", "count > 3"]);
}

#[test]
fn test_guard_layout_mismatch_rejected() {
    let mut cond = Conditions::new();
    cond.add(Row::guarded(
        vec![Slot::Bound(true), Slot::guard("x > 0")],
        true,
    ));
    cond.add(Row::guarded(
        vec![Slot::guard("y > 0"), Slot::Bound(true)],
        true,
    ));

    let err = ConditionTable::from_conditions(&cond).unwrap_err();
    assert_eq!(
        err,
        TableError::GuardLayoutMismatch {
            output: OutputValue::Bool(true),
            position: 0,
        }
    );
}

#[test]
fn test_guard_minterm_encoding() {
    // A guard slot asserts its predicate holds, encoding as 1
    let row = Row::guarded(vec![Slot::Bound(false), Slot::guard("x > 0")], true);
    assert_eq!(row.minterm().pattern(), "01");
}

#[test]
fn test_normalization_is_insertion_order_independent() {
    let mut forward = Conditions::new();
    forward.add(Row::implicit(&[true, false]));
    forward.add(Row::implicit(&[false, true]));

    let mut backward = Conditions::new();
    backward.add(Row::implicit(&[false, true]));
    backward.add(Row::implicit(&[true, false]));

    let forward_table = ConditionTable::from_conditions(&forward).unwrap();
    let backward_table = ConditionTable::from_conditions(&backward).unwrap();
    assert_eq!(
        forward_table.on_set(&OutputValue::Bool(true)),
        backward_table.on_set(&OutputValue::Bool(true))
    );
}

#[test]
fn test_parse_table_text() {
    let text = "\
# half adder sum output
.i a b
.o sum carry

10 1-
01 1-
11 01
";
    let table = parse_table(text).unwrap();
    let inputs: Vec<&str> = table.inputs.iter().map(|s| s.as_ref()).collect();
    assert_eq!(inputs, vec!["a", "b"]);
    let outputs: Vec<&str> = table.outputs.iter().map(|s| s.as_ref()).collect();
    assert_eq!(outputs, vec!["sum", "carry"]);

    let normalized = ConditionTable::from_conditions(&table.conditions).unwrap();
    let sum = normalized.on_set(&OutputValue::literal("sum"));
    let patterns: Vec<String> = sum.iter().map(|m| m.pattern()).collect();
    assert_eq!(patterns, vec!["01", "10"]);

    let carry = normalized.on_set(&OutputValue::literal("carry"));
    let patterns: Vec<String> = carry.iter().map(|m| m.pattern()).collect();
    assert_eq!(patterns, vec!["11"]);
}

#[test]
fn test_parse_table_errors() {
    // Rows before headers
    let err = parse_table("11 1\n").unwrap_err();
    assert_eq!(err, ParseTableError::MissingInputs);

    // Missing output declaration entirely
    let err = parse_table(".i a b\n").unwrap_err();
    assert_eq!(err, ParseTableError::MissingOutputs);

    // Wrong input width
    let err = parse_table(".i a b\n.o f\n111 1\n").unwrap_err();
    assert!(matches!(err, ParseTableError::InvalidLine { line: 3, .. }));

    // Don't-care input bits are not accepted in rows
    let err = parse_table(".i a b\n.o f\n1- 1\n").unwrap_err();
    assert!(matches!(err, ParseTableError::InvalidLine { .. }));

    // Garbage output bit
    let err = parse_table(".i a b\n.o f\n11 x\n").unwrap_err();
    assert!(matches!(err, ParseTableError::InvalidLine { .. }));
}
