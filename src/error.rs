use crate::value::Kind;
use std::fmt::{Display, Formatter};
use std::panic::Location;

/// The closed set of faults the engine can raise. `Error` carries the originating source
/// location (captured automatically via `#[track_caller]`) purely as a diagnostic; it is
/// opaque to callers and not part of equality/matching.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// A growable buffer (operator children, token table) could not be extended.
    Alloc,
    /// An internal invariant was violated; should be unreachable given a correct
    /// scanner/parser pair.
    State(&'static str),
    /// A lexical or structural problem in the source text, with the offset it was found at.
    Syntax { message: String, offset: usize },
    /// A token could not be classified as any recognized literal or operator.
    UnknownType(Vec<u8>),
    /// An operator was applied to the wrong number of children.
    OpArity { op: Kind, actual: usize },
    /// An operator was applied to operands of an incompatible or `NULL` type.
    OpArgType(&'static str),
}

/// A structured, non-fatal error. The engine never panics on malformed input or unresolved
/// variables; every fallible path returns `Result<_, Error>` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    origin: &'static str,
    line: u32,
}

impl Error {
    #[track_caller]
    fn at(kind: ErrorKind) -> Self {
        let location = Location::caller();
        Self {
            kind,
            origin: location.file(),
            line: location.line(),
        }
    }

    #[track_caller]
    pub(crate) fn alloc() -> Self {
        Self::at(ErrorKind::Alloc)
    }

    #[track_caller]
    pub(crate) fn state(message: &'static str) -> Self {
        Self::at(ErrorKind::State(message))
    }

    #[track_caller]
    pub(crate) fn syntax(message: impl Into<String>, offset: usize) -> Self {
        Self::at(ErrorKind::Syntax {
            message: message.into(),
            offset,
        })
    }

    #[track_caller]
    pub(crate) fn unknown_type(bytes: &[u8]) -> Self {
        Self::at(ErrorKind::UnknownType(bytes.to_vec()))
    }

    #[track_caller]
    pub(crate) fn op_arity(op: Kind, actual: usize) -> Self {
        Self::at(ErrorKind::OpArity { op, actual })
    }

    #[track_caller]
    pub(crate) fn op_arg_type(message: &'static str) -> Self {
        Self::at(ErrorKind::OpArgType(message))
    }

    /// Origin file of the code that raised this error, for diagnostics only.
    pub fn origin_file(&self) -> &'static str {
        self.origin
    }

    /// Origin line of the code that raised this error, for diagnostics only.
    pub fn origin_line(&self) -> u32 {
        self.line
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Alloc => write!(f, "AllocError: failed to grow an internal buffer"),
            ErrorKind::State(message) => write!(f, "StateError: {}", message),
            ErrorKind::Syntax { message, offset } => {
                write!(f, "SyntaxError: {} (at byte offset {})", message, offset)
            }
            ErrorKind::UnknownType(bytes) => write!(
                f,
                "UnknownTypeError: {:?}",
                String::from_utf8_lossy(bytes)
            ),
            ErrorKind::OpArity { op, actual } => {
                write!(f, "OpArityError: {} given {} operand(s)", op, actual)
            }
            ErrorKind::OpArgType(message) => write!(f, "OpArgTypeError: {}", message),
        }
    }
}

impl std::error::Error for Error {}
