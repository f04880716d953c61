//! Handles for interned strings.

use std::fmt;

/// Index of a string in a [`StringInterner`](crate::StringInterner).
///
/// Identifiers, badges and string keys are all interned, so comparing two
/// of them is a single integer compare.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string. Every interner stores it at index 0.
    pub const EMPTY: Name = Name(0);

    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    /// Position in the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
