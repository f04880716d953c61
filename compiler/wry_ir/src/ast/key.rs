//! Associative keys.

use std::fmt;

use crate::{Name, StringLookup};

/// A key in an associative container.
///
/// Badges and indices share one key space: `Badge(x)` never equals
/// `Index(n)`, so a container can hold both `0` and `"0"`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    /// Interned string label.
    Badge(Name),
    /// Non-negative integer position.
    Index(u64),
}

impl Key {
    #[inline]
    pub fn is_badge(self) -> bool {
        matches!(self, Key::Badge(_))
    }

    #[inline]
    pub fn is_index(self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Render the key for messages: badges bare, indices as digits.
    pub fn display<I: StringLookup + ?Sized>(self, interner: &I) -> KeyDisplay<'_, I> {
        KeyDisplay { key: self, interner }
    }
}

/// [`Key`] formatter borrowing an interner.
pub struct KeyDisplay<'a, I: ?Sized> {
    key: Key,
    interner: &'a I,
}

impl<I: StringLookup + ?Sized> fmt::Display for KeyDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Key::Badge(name) => f.write_str(self.interner.lookup(name)),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}
