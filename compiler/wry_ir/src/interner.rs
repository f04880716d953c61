//! String interner shared by the lexer, parser and evaluator.
//!
//! Every identifier, badge and string-literal key in a script is interned
//! once, so key comparison during chain resolution never touches the text.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use thiserror::Error;

/// Words the lexer and evaluator ask for on every run.
const PRELUDE: &[&str] = &[
    "and", "as", "break", "catch", "continue", "do", "elif", "else", "false", "for", "from",
    "func", "if", "in", "inherit", "not", "null", "or", "raise", "return", "true", "try",
    "with", "enter", "release", "kind", "message", "name",
];

/// The string table ran out of `u32` indices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("string interner is full ({count} strings)")]
pub struct InternError {
    pub count: usize,
}

#[derive(Default)]
struct Table {
    indices: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl Table {
    fn insert(&mut self, s: &str) -> Result<Name, InternError> {
        let count = self.strings.len();
        let index = u32::try_from(count).map_err(|_| InternError { count })?;
        let name = Name::from_index(index);
        // Strings stay interned until the process exits.
        let text: &'static str = Box::leak(Box::from(s));
        self.strings.push(text);
        self.indices.insert(text, name);
        Ok(name)
    }
}

/// Append-only string table behind a read/write lock.
///
/// Lookups take the read lock; only a string seen for the first time takes
/// the write lock. Index 0 is always the empty string.
pub struct StringInterner {
    table: RwLock<Table>,
}

impl StringInterner {
    /// An interner holding the empty string and the language's keywords.
    pub fn new() -> Self {
        let mut table = Table::default();
        for word in std::iter::once("").chain(PRELUDE.iter().copied()) {
            if !table.indices.contains_key(word) {
                // A fresh table cannot be full.
                let _ = table.insert(word);
            }
        }
        StringInterner {
            table: RwLock::new(table),
        }
    }

    /// Intern `s`, failing only when the table is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(&name) = self.table.read().indices.get(s) {
            return Ok(name);
        }
        let mut table = self.table.write();
        match table.indices.get(s) {
            Some(&name) => Ok(name),
            None => table.insert(s),
        }
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics once more than `u32::MAX` distinct strings are interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The text behind `name`, or `""` for a name from another interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or_default()
    }

    /// Number of distinct strings, the empty string included.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Never true: the empty string is always present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only access to interned text, so formatting code can take any
/// interner handle.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Cloneable handle to one interner, for hosts that run several scripts.
#[derive(Clone, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
