//! The tagged value model shared by every stage of the engine: the scanner classifies raw
//! byte slices into a [Kind], the parser attaches a [Payload] to build a [Node], and the
//! evaluator produces [Node] values both from literals baked into the compiled expression
//! and from the caller's dictionary.

use std::fmt::{Debug, Display, Formatter};

/// Discriminant for every literal and operator recognized by the grammar.
///
/// Literal kinds and operator kinds are disjoint; [Kind::is_op] and [Kind::is_bool_valued]
/// are the two predicates the evaluator relies on to dispatch correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absent / unresolved. Returned by a dictionary for an unknown variable name.
    Null,
    True,
    False,
    Number,
    String,
    Date,
    Var,
    TypeBool,
    TypeDate,
    TypeNumber,
    TypeString,
    Not,
    And,
    Or,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    Exst,
    Type,
}

impl Kind {
    /// Whether this kind is one of the eleven prefix operators.
    pub fn is_op(&self) -> bool {
        matches!(
            self,
            Kind::Not
                | Kind::And
                | Kind::Or
                | Kind::Eq
                | Kind::Neq
                | Kind::Lt
                | Kind::Gt
                | Kind::Lte
                | Kind::Gte
                | Kind::Exst
                | Kind::Type
        )
    }

    /// Whether a node of this kind evaluates to a boolean: `TRUE`/`FALSE` literals, or any
    /// operator (every operator's result is a boolean by construction).
    pub fn is_bool_valued(&self) -> bool {
        matches!(self, Kind::True | Kind::False) || self.is_op()
    }

    /// Whether this kind is one of the four type literals usable as the first operand of `@`.
    pub fn is_type_literal(&self) -> bool {
        matches!(
            self,
            Kind::TypeBool | Kind::TypeDate | Kind::TypeNumber | Kind::TypeString
        )
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A calendar date as carried by a `DATE` literal node. Constructed only through
/// [DateValue::new], which enforces the calendar-true range documented in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DateValue {
    /// Build a date, validating `1 <= month <= 12` and `1 <= day <=` the calendar-true
    /// length of that month (leap years included). Returns `None` on an out-of-range value;
    /// the scanner relies on this to treat e.g. `2021-02-30` as an unrecognized token rather
    /// than a `DATE` literal.
    pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A reference to a child node, the typed replacement for the source's signed-integer
/// arena-selector trick: the variant itself says which arena to index into, so "index into
/// the wrong arena" is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Const(u32),
    Var(u32),
}

/// The payload carried by a [Node], determined by its [Kind] (see the table in the data
/// model: literal kinds with no payload carry [Payload::None], `NUMBER` carries a float,
/// `DATE` a calendar date, `STRING`/`VAR` raw bytes, and every operator an ordered child list).
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    Number(f64),
    Date(DateValue),
    Bytes(Vec<u8>),
    Children(Vec<NodeRef>),
}

/// A fully materialized node: a [Kind] tag plus whatever [Payload] that kind requires.
///
/// Dictionaries passed to [crate::evaluate] return `Node` values directly, so constructing
/// one from application code never needs to reach past this module.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: Kind,
    pub payload: Payload,
}

impl Node {
    pub fn null() -> Self {
        Self {
            kind: Kind::Null,
            payload: Payload::None,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            kind: if value { Kind::True } else { Kind::False },
            payload: Payload::None,
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            kind: Kind::Number,
            payload: Payload::Number(value),
        }
    }

    pub fn date(date: DateValue) -> Self {
        Self {
            kind: Kind::Date,
            payload: Payload::Date(date),
        }
    }

    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind: Kind::String,
            payload: Payload::Bytes(bytes.into()),
        }
    }

    pub(crate) fn var(name: Vec<u8>) -> Self {
        Self {
            kind: Kind::Var,
            payload: Payload::Bytes(name),
        }
    }

    pub(crate) fn op(kind: Kind, children: Vec<NodeRef>) -> Self {
        debug_assert!(kind.is_op());
        Self {
            kind,
            payload: Payload::Children(children),
        }
    }

    pub(crate) fn type_literal(kind: Kind) -> Self {
        debug_assert!(kind.is_type_literal());
        Self {
            kind,
            payload: Payload::None,
        }
    }

    /// Bytes backing a `STRING` or `VAR` node, for payload comparison in `EQ`/`NEQ`.
    pub(crate) fn bytes(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Children of an operator node.
    pub(crate) fn children(&self) -> &[NodeRef] {
        match &self.payload {
            Payload::Children(c) => c,
            _ => &[],
        }
    }
}
