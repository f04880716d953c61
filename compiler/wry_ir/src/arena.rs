//! Arena storage for the flat AST.
//!
//! The parser appends into an [`ExprArena`]; once parsing finishes the arena
//! is frozen into a [`SharedArena`] that function values hold on to, so a
//! function body stays valid for as long as any closure references it.

use std::ops::Deref;
use std::sync::Arc;

use crate::ast::{
    Entry, EntryRange, Expr, ExprId, FuncDef, FuncId, NameRange, Param, ParamRange, Stmt,
    StmtId, StmtRange,
};
use crate::Name;

/// Contiguous tables for every AST node kind.
#[derive(Default, Debug, Clone)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
    entries: Vec<Entry>,
    params: Vec<Param>,
    names: Vec<Name>,
    funcs: Vec<FuncDef>,
}

fn next_id(len: usize) -> u32 {
    // Node counts are bounded by source length, which the lexer bounds by u32.
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Append `items` to `table`, returning `(start, len)`.
fn extend<T>(table: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> (u32, u32) {
    let start = next_id(table.len());
    table.extend(items);
    let len = next_id(table.len()) - start;
    (start, len)
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_id(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_id(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Store a statement list; the ids must already be allocated.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let (start, len) = extend(&mut self.stmt_lists, stmts);
        StmtRange::new(start, len)
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    pub fn alloc_entries(&mut self, entries: impl IntoIterator<Item = Entry>) -> EntryRange {
        let (start, len) = extend(&mut self.entries, entries);
        EntryRange::new(start, len)
    }

    #[inline]
    pub fn entries(&self, range: EntryRange) -> &[Entry] {
        &self.entries[range.to_range()]
    }

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Param>) -> ParamRange {
        let (start, len) = extend(&mut self.params, params);
        ParamRange::new(start, len)
    }

    #[inline]
    pub fn params(&self, range: ParamRange) -> &[Param] {
        &self.params[range.to_range()]
    }

    pub fn alloc_names(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let (start, len) = extend(&mut self.names, names);
        NameRange::new(start, len)
    }

    #[inline]
    pub fn names(&self, range: NameRange) -> &[Name] {
        &self.names[range.to_range()]
    }

    pub fn alloc_func(&mut self, func: FuncDef) -> FuncId {
        let id = FuncId::new(next_id(self.funcs.len()));
        self.funcs.push(func);
        id
    }

    #[inline]
    pub fn func(&self, id: FuncId) -> &FuncDef {
        &self.funcs[id.index()]
    }

    /// Number of expressions allocated.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of statements allocated.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

/// Frozen, reference-counted arena.
#[derive(Clone, Debug)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }

    /// True when both handles point at the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &ExprArena {
        &self.0
    }
}

impl From<ExprArena> for SharedArena {
    fn from(arena: ExprArena) -> Self {
        SharedArena::new(arena)
    }
}
