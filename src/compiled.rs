//! The output of [crate::parse]: two arenas of [Node], indexed through [NodeRef].

use crate::value::{Node, NodeRef};

/// A parsed and arity-checked expression, ready for repeated evaluation against different
/// dictionaries. Building one never touches a dictionary; resolving variables is entirely
/// [crate::evaluate]'s job, which is what lets the same `CompiledExpr` be evaluated from
/// multiple threads at once (see the crate root docs).
///
/// `root` is recorded explicitly rather than assumed to be `NodeRef::Const(0)`: the parser
/// allocates nodes post-order (a node's children are pushed to the arenas before the node
/// itself), so the top-level expression only ever lands at index 0 when it has no literal or
/// nested operator anywhere beneath it — the common case is a later index.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    pub(crate) constants: Vec<Node>,
    pub(crate) variables: Vec<Node>,
    pub(crate) root: NodeRef,
}

impl CompiledExpr {
    /// Number of constant (non-variable) nodes in the compiled tree.
    pub fn constants_len(&self) -> usize {
        self.constants.len()
    }

    /// Number of distinct `[name]` variable references in the compiled tree.
    pub fn variables_len(&self) -> usize {
        self.variables.len()
    }
}
