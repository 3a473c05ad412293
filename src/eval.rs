//! Evaluation: walks a [CompiledExpr] against a caller-supplied dictionary.
//!
//! Variables are resolved once up front into a local `resolved` table the same shape as the
//! expression's `variables` arena, rather than mutating the `CompiledExpr` in place. Since
//! `evaluate` only ever reads `expr`, the same `CompiledExpr` can be evaluated concurrently
//! from multiple threads — a deliberate improvement over the single-call-site restriction of
//! the arena scheme this design replaces.

use std::cmp::Ordering;

use crate::compiled::CompiledExpr;
use crate::error::Error;
use crate::value::{Kind, Node, NodeRef, Payload};

/// Evaluate `expr` to a boolean, resolving each `[name]` variable by calling `dict` once per
/// distinct variable. `dict` returns [Node::null] for a name it does not recognize.
pub fn evaluate<F>(expr: &CompiledExpr, mut dict: F) -> Result<bool, Error>
where
    F: FnMut(&[u8]) -> Node,
{
    let resolved: Vec<Node> = expr
        .variables
        .iter()
        .map(|v| {
            let name = v.bytes().expect("variable node payload is always its name");
            dict(name)
        })
        .collect();

    let ctx = Context {
        constants: &expr.constants,
        resolved: &resolved,
    };
    ctx.eval_bool(expr.root)
}

struct Context<'a> {
    constants: &'a [Node],
    resolved: &'a [Node],
}

impl<'a> Context<'a> {
    fn resolve(&self, r: NodeRef) -> &Node {
        match r {
            NodeRef::Const(i) => &self.constants[i as usize],
            NodeRef::Var(i) => &self.resolved[i as usize],
        }
    }

    fn eval_bool(&self, r: NodeRef) -> Result<bool, Error> {
        let node = self.resolve(r);
        match node.kind {
            Kind::True => Ok(true),
            Kind::False => Ok(false),
            _ if node.kind.is_op() => self.eval_op(node),
            _ => Err(Error::state("non-boolean leaf at boolean position")),
        }
    }

    fn eval_op(&self, node: &Node) -> Result<bool, Error> {
        let children = node.children();
        match node.kind {
            Kind::Not => Ok(!self.eval_bool(children[0])?),
            Kind::And => {
                for &c in children {
                    if !self.eval_bool(c)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Kind::Or => {
                for &c in children {
                    if self.eval_bool(c)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Kind::Exst => Ok(self.resolve(children[0]).kind != Kind::Null),
            Kind::Eq => self.eval_eq(children),
            Kind::Neq => self.eval_neq(children[0], children[1]),
            Kind::Lt => self.eval_compare(children[0], children[1], |o| o == Ordering::Less),
            Kind::Gt => self.eval_compare(children[0], children[1], |o| o == Ordering::Greater),
            Kind::Lte => self.eval_compare(children[0], children[1], |o| o != Ordering::Greater),
            Kind::Gte => self.eval_compare(children[0], children[1], |o| o != Ordering::Less),
            Kind::Type => self.eval_type(children),
            _ => Err(Error::state("non-operator kind reached eval_op")),
        }
    }

    fn eval_eq(&self, children: &[NodeRef]) -> Result<bool, Error> {
        if children.iter().any(|&c| self.resolve(c).kind == Kind::Null) {
            return Err(Error::op_arg_type("EQ operand is NULL"));
        }
        let first_ref = children[0];
        if self.resolve(first_ref).kind.is_bool_valued() {
            let first = self.eval_bool(first_ref)?;
            for &c in &children[1..] {
                if self.eval_bool(c)? != first {
                    return Ok(false);
                }
            }
            Ok(true)
        } else {
            let first = self.resolve(first_ref);
            for &c in &children[1..] {
                if !payload_eq(first, self.resolve(c)) {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }

    fn eval_neq(&self, a: NodeRef, b: NodeRef) -> Result<bool, Error> {
        let na = self.resolve(a);
        let nb = self.resolve(b);
        if na.kind == Kind::Null || nb.kind == Kind::Null {
            return Err(Error::op_arg_type("NEQ operand is NULL"));
        }
        if na.kind.is_bool_valued() && nb.kind.is_bool_valued() {
            Ok(self.eval_bool(a)? != self.eval_bool(b)?)
        } else {
            Ok(!payload_eq(na, nb))
        }
    }

    fn eval_compare(
        &self,
        a: NodeRef,
        b: NodeRef,
        accept: impl Fn(Ordering) -> bool,
    ) -> Result<bool, Error> {
        let na = self.resolve(a);
        let nb = self.resolve(b);
        if na.kind == Kind::Null || nb.kind == Kind::Null {
            return Err(Error::op_arg_type("comparison operand is NULL"));
        }

        let order = if na.kind == Kind::Number && nb.kind == Kind::Number {
            let (Payload::Number(x), Payload::Number(y)) = (&na.payload, &nb.payload) else {
                unreachable!("NUMBER node without a Number payload")
            };
            x.partial_cmp(y)
                .ok_or_else(|| Error::op_arg_type("NUMBER comparison with NaN is undefined"))?
        } else if na.kind == Kind::Date && nb.kind == Kind::Date {
            let (Payload::Date(x), Payload::Date(y)) = (&na.payload, &nb.payload) else {
                unreachable!("DATE node without a Date payload")
            };
            x.cmp(y)
        } else if na.kind == Kind::String && nb.kind == Kind::String {
            let (Payload::Bytes(x), Payload::Bytes(y)) = (&na.payload, &nb.payload) else {
                unreachable!("STRING node without a Bytes payload")
            };
            compare_bytes(x, y)
        } else if na.kind.is_bool_valued() && nb.kind.is_bool_valued() {
            (self.eval_bool(a)? as u8).cmp(&(self.eval_bool(b)? as u8))
        } else {
            return Err(Error::op_arg_type(
                "comparison requires two operands of the same comparable type",
            ));
        };

        Ok(accept(order))
    }

    fn eval_type(&self, children: &[NodeRef]) -> Result<bool, Error> {
        let type_literal = self.resolve(children[0]).kind;
        if !type_literal.is_type_literal() {
            return Err(Error::op_arg_type("TYPE's first operand must be a type literal"));
        }
        for &c in &children[1..] {
            let kind = self.resolve(c).kind;
            let is_match = match type_literal {
                Kind::TypeBool => kind.is_bool_valued(),
                Kind::TypeDate => kind == Kind::Date,
                Kind::TypeNumber => kind == Kind::Number,
                Kind::TypeString => kind == Kind::String,
                _ => unreachable!("checked above"),
            };
            if !is_match {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// `EQ`/`NEQ` equality for non-boolean-valued nodes: same [Kind], bit-identical payload.
fn payload_eq(a: &Node, b: &Node) -> bool {
    if a.kind != b.kind {
        return false;
    }
    match (&a.payload, &b.payload) {
        (Payload::None, Payload::None) => true,
        (Payload::Number(x), Payload::Number(y)) => x.to_bits() == y.to_bits(),
        (Payload::Date(x), Payload::Date(y)) => x == y,
        (Payload::Bytes(x), Payload::Bytes(y)) => x == y,
        _ => false,
    }
}

/// Lexicographic order up to the shorter operand's length, ties broken by length — so `"ab"
/// < "abc"` even though neither is a prefix-extension mismatch within the compared range.
fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let min_len = a.len().min(b.len());
    match a[..min_len].cmp(&b[..min_len]) {
        Ordering::Equal => a.len().cmp(&b.len()),
        other => other,
    }
}

#[cfg(test)]
mod __tests__;
