use super::evaluate;
use crate::error::ErrorKind;
use crate::parser::parse;
use crate::value::{DateValue, Node};

fn empty_dict(_: &[u8]) -> Node {
    Node::null()
}

#[test]
fn and_short_circuits_on_first_false() {
    let expr = parse(b"(& FALSE TRUE)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(false));
}

#[test]
fn or_short_circuits_on_first_true() {
    let expr = parse(b"(| TRUE FALSE)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn not_negates_its_child() {
    let expr = parse(b"(! FALSE)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn exst_is_false_for_unresolved_variable() {
    let expr = parse(b"(? [missing])").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(false));
}

#[test]
fn exst_is_true_for_resolved_variable() {
    let expr = parse(b"(? [present])").unwrap();
    let result = evaluate(&expr, |name| match name {
        b"present" => Node::number(1.0),
        _ => Node::null(),
    });
    assert_eq!(result, Ok(true));
}

#[test]
fn eq_on_strings_resolved_from_dictionary() {
    let expr = parse(b"(= [status] 'active')").unwrap();
    let result = evaluate(&expr, |name| match name {
        b"status" => Node::string("active"),
        _ => Node::null(),
    });
    assert_eq!(result, Ok(true));
}

#[test]
fn eq_on_boolean_mixture_evaluates_all_children_as_booleans() {
    // A NUMBER operand sits alongside a boolean-valued AND node: because one child is
    // boolean-valued, EQ compares all children as booleans (nonzero-number dictionary
    // answers coerce through `?`-style truthiness, not this operator; here both operands
    // are already boolean-kinded, so the boolean branch is exercised directly).
    let expr = parse(b"(= TRUE (& TRUE TRUE))").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn eq_is_commutative_on_mismatched_kinds() {
    let a = parse(b"(= 'x' TRUE)").unwrap();
    let b = parse(b"(= TRUE 'x')").unwrap();
    assert_eq!(evaluate(&a, empty_dict), evaluate(&b, empty_dict));
}

#[test]
fn eq_rejects_null_operand() {
    let expr = parse(b"(= [missing] 1)").unwrap();
    let err = evaluate(&expr, empty_dict).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OpArgType(_)));
}

#[test]
fn lt_orders_numbers() {
    let expr = parse(b"(< 1 2)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn lt_orders_dates() {
    let expr = parse(b"(< 2020-01-01 2020-01-02)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn string_ordering_breaks_ties_by_length() {
    let expr = parse(b"(< 'ab' 'abc')").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn comparison_rejects_mismatched_types() {
    let expr = parse(b"(< 1 'abc')").unwrap();
    let err = evaluate(&expr, empty_dict).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OpArgType(_)));
}

#[test]
fn gte_is_inclusive() {
    let expr = parse(b"(>= 5 5)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn type_matches_every_remaining_operand() {
    let expr = parse(b"(@ STRING 'a' 'b')").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn type_is_false_when_any_operand_mismatches() {
    let expr = parse(b"(@ STRING 'a' 1)").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(false));
}

#[test]
fn type_bool_matches_operator_results_too() {
    let expr = parse(b"(@ BOOL TRUE (& TRUE TRUE))").unwrap();
    assert_eq!(evaluate(&expr, empty_dict), Ok(true));
}

#[test]
fn resolves_each_distinct_variable_from_the_dictionary() {
    let expr = parse(b"(& (? [a]) (? [b]))").unwrap();
    let result = evaluate(&expr, |name| {
        if name == b"a" || name == b"b" {
            Node::number(1.0)
        } else {
            Node::null()
        }
    });
    assert_eq!(result, Ok(true));
}

#[test]
fn date_equality_is_calendar_exact() {
    let expr = parse(b"(= 2020-02-29 [d])").unwrap();
    let result = evaluate(&expr, |_| Node::date(DateValue::new(2020, 2, 29).unwrap()));
    assert_eq!(result, Ok(true));
}

#[test]
fn dictionary_can_be_backed_by_an_arbitrary_json_record() {
    let record: serde_json::Value = serde_json::json!({
        "status": "active",
        "age": 42
    });

    let expr = parse(b"(& (= [status] 'active') (>= [age] 18))").unwrap();
    let result = evaluate(&expr, |name| {
        let key = std::str::from_utf8(name).unwrap();
        match record.get(key) {
            Some(serde_json::Value::String(s)) => Node::string(s.as_bytes().to_vec()),
            Some(serde_json::Value::Number(n)) => Node::number(n.as_f64().unwrap()),
            _ => Node::null(),
        }
    });
    assert_eq!(result, Ok(true));
}
