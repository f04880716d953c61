//! Flat AST for Wry scripts.

mod expr;
mod key;
mod operators;
mod ranges;
mod stmt;

pub use expr::{Entry, EntryKind, Expr, ExprKind};
pub use key::{Key, KeyDisplay};
pub use operators::{BinaryOp, UnaryOp};
pub use ranges::{EntryRange, ExprId, FuncId, NameRange, ParamRange, StmtId, StmtRange};
pub use stmt::{Block, CatchClause, FuncDef, Param, Script, Stmt, StmtKind};

#[cfg(test)]
mod tests;
