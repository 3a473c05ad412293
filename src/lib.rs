//! `pbg` compiles and evaluates a small prefix-notation boolean grammar: S-expressions built
//! from eleven operators (`NOT AND OR EQ NEQ LT GT LTE GTE EXST TYPE`) and six literal kinds
//! (`TRUE`/`FALSE`, `NUMBER`, `STRING`, `DATE`, `VAR`, and the four type literals used by `@`).
//!
//! # Overview
//!
//! [parse] compiles source text once into a [CompiledExpr]: an arena of constant nodes and an
//! arena of named variable references, with every operator's arity already checked. [evaluate]
//! then walks that tree against a caller-supplied dictionary — any `FnMut(&[u8]) -> Node` — to
//! resolve `[name]` variables and produce a boolean result.
//!
//! ```
//! use pbg::{evaluate, parse, Node};
//!
//! let expr = parse(b"(& (= [status] 'active') (>= [age] 18))").unwrap();
//! let result = evaluate(&expr, |name: &[u8]| match name {
//!     b"status" => Node::string("active"),
//!     b"age" => Node::number(42.0),
//!     _ => Node::null(),
//! });
//! assert_eq!(result, Ok(true));
//! ```
//!
//! Compiling is cheap to do once and [CompiledExpr] is safe to [evaluate] concurrently from
//! multiple threads against different dictionaries, since evaluation never mutates it.
//!
//! # Errors
//!
//! Every fallible path returns a structured [Error] rather than panicking: malformed source
//! text, a wrong-arity operator, an operator applied to an incompatible or `NULL` operand, or
//! (on allocation failure) [ErrorKind::Alloc]. See [Error] for the full taxonomy.
//!
//! # Debug tracing
//!
//! [parse_with] accepts a [Log] level to trace tokens, operator arity resolution, and raised
//! errors to stdout. Tracing compiles out entirely in release builds.

mod compiled;
mod error;
mod eval;
mod lexeme;
mod parser;
mod scan;
mod util;
mod value;

pub use compiled::CompiledExpr;
pub use error::{Error, ErrorKind};
pub use eval::evaluate;
pub use parser::{parse, parse_with};
pub use util::Log;
pub use value::{DateValue, Kind, Node, NodeRef, Payload};
