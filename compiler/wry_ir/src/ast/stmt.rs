//! Statement nodes, blocks and function definitions.

use std::fmt;

use super::ranges::{ExprId, FuncId, NameRange, ParamRange, StmtRange};
use crate::{Name, Span};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Braced statement list. Evaluated under its own frame.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: StmtRange,
    pub span: Span,
}

/// Statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement.
    Expr(ExprId),

    /// `if cond { } elif cond { } else { }` — `elif` chains are nested
    /// `If` statements inside a synthesized else block.
    If {
        cond: ExprId,
        then_block: Block,
        else_block: Option<Block>,
    },
    /// `do { }`
    Do(Block),
    /// `for v in iter { }` / `for k, v in iter { }`
    For {
        key: Option<Name>,
        value: Name,
        iter: ExprId,
        body: Block,
    },
    /// `try { } catch ... { }`
    Try { body: Block, catch: CatchClause },
    /// `with resource as name { }`
    With {
        resource: ExprId,
        binding: Option<Name>,
        body: Block,
    },

    /// `name = { }`
    AssignBlock { name: Name, body: Block },
    /// `func name(params) { }`
    FuncBlock { name: Name, func: FuncId },
    /// `inherit name from parent { }`
    InheritBlock { name: Name, parent: Name, body: Block },

    /// `return expr?`
    Return(Option<ExprId>),
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `raise expr?`
    Raise(Option<ExprId>),
}

/// Recovery clause of a `try` statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CatchClause {
    /// Name the fault value is bound to.
    pub binding: Option<Name>,
    /// Fault kinds caught; empty catches every fault.
    pub kinds: NameRange,
    pub body: Block,
}

/// Function definition shared by `func` blocks and function expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncDef {
    /// `Name::EMPTY` for anonymous functions.
    pub name: Name,
    pub params: ParamRange,
    pub body: Block,
    pub span: Span,
}

/// Formal parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    /// Default value, evaluated in the callee frame when the argument is missing.
    pub default: Option<ExprId>,
    /// `...name` collects the remaining arguments.
    pub rest: bool,
    pub span: Span,
}

/// A parsed script: top-level statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Script {
    pub body: StmtRange,
    pub span: Span,
}
