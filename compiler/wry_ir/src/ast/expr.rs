//! Expression nodes.
//!
//! Children are indices into the arena, never boxes. Each variant maps to
//! one expression rule of the Wry grammar.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use super::ranges::{EntryRange, ExprId, FuncId};
use super::Key;
use crate::{Name, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `null`
    Null,
    /// `true`, `false`
    Bool(bool),
    /// `42`
    Int(i64),
    /// `1.5`, `2e3` (stored as bits)
    Float(u64),
    /// `"text"` (interned, escapes cooked)
    Str(Name),

    /// Name reference: `x`
    Ident(Name),
    /// Badge lookup: `@x`, `@0`, `@"first name"`
    Badge(Key),
    /// Member lookup: `a.x`, `a.0`
    Member { receiver: ExprId, key: Key },
    /// Key lookup: `a[expr]`
    Index { receiver: ExprId, key: ExprId },

    /// Array literal: `[a, b: 2, ...rest]`
    Array(EntryRange),
    /// Argument list: `(1, b: 2)` — builds an argument container
    Args(EntryRange),

    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// Structural composition: `left & right`
    Compose { left: ExprId, right: ExprId },
    /// Execution: `func(args)`
    Call { func: ExprId, args: EntryRange },

    /// Assignment expression: `x = value`, `@0 = value`
    Assign { target: Key, value: ExprId },

    /// Anonymous function: `func (a, b) { ... }`
    Func(FuncId),
}

/// One entry of an array literal or argument list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Entry {
    pub kind: EntryKind,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EntryKind {
    /// Unkeyed entry, takes the next auto-index.
    Item(ExprId),
    /// `key: value`
    Keyed { key: Key, value: ExprId },
    /// Name expansion: `...name`
    Expand(Name),
}
