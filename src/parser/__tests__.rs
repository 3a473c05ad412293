use super::parse;
use crate::error::ErrorKind;
use crate::value::Kind;

#[test]
fn compiles_literal_constants_and_one_operator_node() {
    let expr = parse(b"(& TRUE FALSE)").unwrap();
    assert_eq!(expr.constants_len(), 3); // TRUE, FALSE, the AND node itself
    assert_eq!(expr.variables_len(), 0);
}

#[test]
fn distinct_variable_occurrences_each_get_an_arena_slot() {
    let expr = parse(b"(= [age] [age])").unwrap();
    assert_eq!(expr.variables_len(), 2);
}

#[test]
fn nested_operators_compile() {
    let expr = parse(b"(& (= [status] 'active') (>= [age] 18))").unwrap();
    assert_eq!(expr.variables_len(), 2);
    assert!(expr.constants_len() >= 4);
}

#[test]
fn not_rejects_wrong_arity() {
    let err = parse(b"(! TRUE FALSE)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OpArity { op: Kind::Not, actual: 2 }));
}

#[test]
fn and_requires_at_least_two_children() {
    let err = parse(b"(& TRUE)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OpArity { op: Kind::And, actual: 1 }));
}

#[test]
fn lt_rejects_more_than_two_children() {
    let err = parse(b"(< 1 2 3)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OpArity { op: Kind::Lt, actual: 3 }));
}

#[test]
fn type_accepts_two_or_more_children() {
    let expr = parse(b"(@ NUMBER 1 2 3)").unwrap();
    assert_eq!(expr.variables_len(), 0);
}

#[test]
fn date_literal_round_trips_through_compilation() {
    let expr = parse(b"(? 2020-02-29)").unwrap();
    assert_eq!(expr.constants_len(), 2);
}

#[test]
fn invalid_calendar_date_is_unknown_type() {
    let err = parse(b"(? 2021-02-30)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
}
