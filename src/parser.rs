//! The recursive-descent parser: walks the flat [crate::scan::ScanResult] token table and
//! builds a [CompiledExpr], checking every operator's arity as its children close.

use crate::compiled::CompiledExpr;
use crate::error::Error;
use crate::lexeme::{classify_date, parse_number};
use crate::scan::{scan, Token};
use crate::util::{try_push, Code, Log};
use crate::value::{Kind, Node, NodeRef};

fn arity_ok(kind: Kind, count: usize) -> bool {
    match kind {
        Kind::Not | Kind::Exst => count == 1,
        Kind::Neq | Kind::Lt | Kind::Gt | Kind::Lte | Kind::Gte => count == 2,
        Kind::And | Kind::Or | Kind::Eq | Kind::Type => count >= 2,
        _ => false,
    }
}

struct Builder<'c> {
    code: &'c Code<'c>,
    tokens: Vec<Token>,
    closings: Vec<usize>,
    token_cursor: usize,
    closing_cursor: usize,
    constants: Vec<Node>,
    variables: Vec<Node>,
    log: Log<&'static str>,
}

impl<'c> Builder<'c> {
    fn peek(&self) -> Result<Token, Error> {
        self.tokens
            .get(self.token_cursor)
            .copied()
            .ok_or_else(|| Error::state("parser ran out of tokens"))
    }

    fn slice(&self, token: Token) -> &'c [u8] {
        &self.code.value[token.offset..token.offset + token.length]
    }

    fn parse_node(&mut self) -> Result<NodeRef, Error> {
        let token = self.peek()?;
        self.token_cursor += 1;

        if token.kind.is_op() {
            return self.parse_operator(token);
        }
        if token.kind == Kind::Var {
            let raw = self.slice(token);
            let name = raw[1..raw.len() - 1].to_vec();
            let idx = self.variables.len() as u32;
            try_push(&mut self.variables, Node::var(name))?;
            return Ok(NodeRef::Var(idx));
        }

        let node = self.literal_node(token)?;
        let idx = self.constants.len() as u32;
        try_push(&mut self.constants, node)?;
        Ok(NodeRef::Const(idx))
    }

    fn literal_node(&self, token: Token) -> Result<Node, Error> {
        let raw = self.slice(token);
        match token.kind {
            Kind::True => Ok(Node::boolean(true)),
            Kind::False => Ok(Node::boolean(false)),
            Kind::Number => Ok(Node::number(parse_number(raw))),
            Kind::Date => {
                let date = classify_date(raw)
                    .ok_or_else(|| Error::state("DATE token failed to re-parse"))?;
                Ok(Node::date(date))
            }
            Kind::String => Ok(Node::string(raw[1..raw.len() - 1].to_vec())),
            Kind::TypeBool | Kind::TypeDate | Kind::TypeNumber | Kind::TypeString => {
                Ok(Node::type_literal(token.kind))
            }
            _ => Err(Error::state("unexpected token kind at literal position")),
        }
    }

    fn parse_operator(&mut self, token: Token) -> Result<NodeRef, Error> {
        let closing_offset = *self
            .closings
            .get(self.closing_cursor)
            .ok_or_else(|| Error::state("operator has no matching closing paren"))?;

        let mut children: Vec<NodeRef> = Vec::with_capacity(2);
        while let Some(next) = self.tokens.get(self.token_cursor) {
            if next.offset >= closing_offset {
                break;
            }
            let child = self.parse_node()?;
            try_push(&mut children, child)?;
        }
        self.closing_cursor += 1;

        if !arity_ok(token.kind, children.len()) {
            return Err(Error::op_arity(token.kind, children.len()));
        }
        self.log.log_arity("parse", token.kind, children.len());

        let idx = self.constants.len() as u32;
        try_push(&mut self.constants, Node::op(token.kind, children))?;
        Ok(NodeRef::Const(idx))
    }
}

/// Compile `source` into a [CompiledExpr], with debug tracing at `log`'s level.
pub fn parse_with(source: &[u8], log: Log<&'static str>) -> Result<CompiledExpr, Error> {
    let code = Code::new(source);
    let scanned = scan(&code, log).map_err(|e| {
        log.log_error("parse", &e, offset_of(&e), &code);
        e
    })?;

    let mut builder = Builder {
        code: &code,
        tokens: scanned.tokens,
        closings: scanned.closings,
        token_cursor: 0,
        closing_cursor: 0,
        constants: Vec::new(),
        variables: Vec::new(),
        log,
    };

    let root = builder.parse_node()?;
    if builder.token_cursor != builder.tokens.len() {
        return Err(Error::state("parser left unconsumed tokens"));
    }
    if builder.variables.len() != scanned.num_vars {
        return Err(Error::state("variable arena size mismatch"));
    }

    Ok(CompiledExpr {
        constants: builder.constants,
        variables: builder.variables,
        root,
    })
}

/// Compile `source` into a [CompiledExpr] with tracing disabled.
pub fn parse(source: &[u8]) -> Result<CompiledExpr, Error> {
    parse_with(source, Log::None)
}

fn offset_of(error: &Error) -> usize {
    match &error.kind {
        crate::error::ErrorKind::Syntax { offset, .. } => *offset,
        _ => 0,
    }
}

#[cfg(test)]
mod __tests__;
