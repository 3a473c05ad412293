use super::scan;
use crate::error::ErrorKind;
use crate::util::{Code, Log};
use crate::value::Kind;

fn scan_ok(source: &[u8]) -> super::ScanResult {
    let code = Code::new(source);
    scan(&code, Log::None).expect("expected scan to succeed")
}

fn scan_err(source: &[u8]) -> ErrorKind {
    let code = Code::new(source);
    scan(&code, Log::None).expect_err("expected scan to fail").kind
}

#[test]
fn simple_and_expression() {
    let result = scan_ok(b"(& TRUE FALSE)");
    let kinds: Vec<Kind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Kind::And, Kind::True, Kind::False]);
    assert_eq!(result.closings.len(), 1);
    assert_eq!(result.num_vars, 0);
}

#[test]
fn counts_distinct_variable_tokens() {
    let result = scan_ok(b"(= [age] [age])");
    assert_eq!(result.num_vars, 2);
}

#[test]
fn paren_not_followed_by_operator_is_rejected() {
    let err = scan_err(b"((& TRUE TRUE))");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn literal_directly_after_open_paren_is_rejected() {
    let err = scan_err(b"(1 2)");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn unclosed_string_is_rejected() {
    let err = scan_err(b"(? 'never closed)");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn unclosed_variable_is_rejected() {
    let err = scan_err(b"(? [never closed)");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn unbalanced_parens_is_rejected() {
    let err = scan_err(b"(& TRUE FALSE");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn bare_literal_without_parens_is_rejected() {
    let err = scan_err(b"TRUE");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn more_than_one_complete_expression_is_rejected() {
    let err = scan_err(b"(? TRUE) (? FALSE)");
    assert!(matches!(err, ErrorKind::Syntax { .. }));
}

#[test]
fn unrecognized_token_is_unknown_type() {
    let err = scan_err(b"(? nonsense)");
    assert!(matches!(err, ErrorKind::UnknownType(_)));
}
