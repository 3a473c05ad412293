//! The lexical classifier: decides the [Kind] of a token from a raw byte slice.
//!
//! Keywords, type literals, and operators are matched by direct byte comparison (the source
//! grammar has a small, fixed vocabulary for these, so a regex would only add overhead and
//! obscure the "literals before operators" ordering the grammar depends on). Numbers and
//! dates have a shape a regex expresses far more legibly than a hand-rolled walk, so those
//! two are matched with [pattern::Pattern] lexemes compiled once behind `once_cell::sync::Lazy`.

mod pattern;

use crate::value::{DateValue, Kind};
use pattern::Pattern;

/// Classify a token slice into a [Kind]. Total: every byte slice classifies to *some* kind,
/// with [Kind::Null] meaning "not a recognized literal or operator".
///
/// Order matters: keyword literals are checked before operators so that, e.g., the four-byte
/// slice `TRUE` is never mistaken for a run of single-byte operators.
pub fn classify(token: &[u8]) -> Kind {
    if let Some(kind) = classify_keyword(token) {
        return kind;
    }
    if Pattern::number().matches(token) {
        return Kind::Number;
    }
    if let Some(date) = classify_date(token) {
        let _ = date;
        return Kind::Date;
    }
    if token.len() >= 2 && token.first() == Some(&b'\'') && token.last() == Some(&b'\'') {
        return Kind::String;
    }
    if token.len() >= 2 && token.first() == Some(&b'[') && token.last() == Some(&b']') {
        return Kind::Var;
    }
    classify_operator(token).unwrap_or(Kind::Null)
}

fn classify_keyword(token: &[u8]) -> Option<Kind> {
    match token {
        b"TRUE" => Some(Kind::True),
        b"FALSE" => Some(Kind::False),
        b"DATE" => Some(Kind::TypeDate),
        b"BOOL" => Some(Kind::TypeBool),
        b"NUMBER" => Some(Kind::TypeNumber),
        b"STRING" => Some(Kind::TypeString),
        _ => None,
    }
}

fn classify_operator(token: &[u8]) -> Option<Kind> {
    match token {
        b"!" => Some(Kind::Not),
        b"&" => Some(Kind::And),
        b"|" => Some(Kind::Or),
        b"=" => Some(Kind::Eq),
        b"<" => Some(Kind::Lt),
        b">" => Some(Kind::Gt),
        b"?" => Some(Kind::Exst),
        b"@" => Some(Kind::Type),
        b"!=" => Some(Kind::Neq),
        b"<=" => Some(Kind::Lte),
        b">=" => Some(Kind::Gte),
        _ => None,
    }
}

/// `DDDD-DD-DD` in shape, with calendar-true month/day validation (see [DateValue::new]).
/// Returns the parsed date so callers that already have a `DATE`-classified token can reuse
/// the work instead of re-parsing (the parser does exactly this).
pub fn classify_date(token: &[u8]) -> Option<DateValue> {
    if !Pattern::date_shape().matches(token) {
        return None;
    }
    let year = parse_digits(&token[0..4]) as u16;
    let month = parse_digits(&token[5..7]) as u8;
    let day = parse_digits(&token[8..10]) as u8;
    DateValue::new(year, month, day)
}

fn parse_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + (*d - b'0') as u32)
}

/// Parse a token already classified as [Kind::Number] into its `f64` value. Panics if the
/// shape does not match; callers must only call this after `classify` returned `Number`.
pub fn parse_number(token: &[u8]) -> f64 {
    std::str::from_utf8(token)
        .expect("number token is ASCII by construction")
        .parse()
        .expect("number token matched the NUMBER pattern")
}
