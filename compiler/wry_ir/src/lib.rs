//! Wry IR - shared data structures for the Wry toolchain.
//!
//! - Spans for source locations
//! - Interned `Name`s for identifiers, badges and string keys
//! - Tokens and `TokenList` for lexer output
//! - The flat AST (`Expr`, `Stmt`, `FuncDef`) stored in an `ExprArena`
//!
//! # Design
//!
//! - **Intern everything**: strings become `Name(u32)`.
//! - **Flatten everything**: no `Box<Expr>`; children are `ExprId(u32)`
//!   indices and child lists are ranges into arena tables.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, SharedArena};
pub use ast::{
    BinaryOp, Block, CatchClause, Entry, EntryKind, EntryRange, Expr, ExprId, ExprKind, FuncDef,
    FuncId, Key, NameRange, Param, ParamRange, Script, Stmt, StmtId, StmtKind, StmtRange, UnaryOp,
};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
