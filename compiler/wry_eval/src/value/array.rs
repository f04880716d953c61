//! The associative container behind arrays, argument lists and scope frames.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use wry_ir::Key;

use super::Value;

/// Ordered map from [`Key`] to [`Value`] with a running auto-index.
///
/// Iteration follows insertion order. Overwriting an existing key keeps its
/// position. `append` assigns `Index(next_index)`; setting an explicit index
/// at or past the counter moves the counter past it, so auto-indices never
/// collide with explicit ones. Badges leave the counter alone. Once
/// `Index(u64::MAX)` is taken no auto-index is left and `append` refuses.
#[derive(Clone, Debug)]
pub struct WryArray {
    entries: IndexMap<Key, Value, FxBuildHasher>,
    /// `None` when the index space is used up.
    next_index: Option<u64>,
}

impl Default for WryArray {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl WryArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        WryArray {
            entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            next_index: Some(0),
        }
    }

    #[inline]
    pub fn get(&self, key: Key) -> Option<&Value> {
        self.entries.get(&key)
    }

    #[inline]
    pub fn contains_key(&self, key: Key) -> bool {
        self.entries.contains_key(&key)
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        if let (Key::Index(index), Some(next)) = (key, self.next_index) {
            if index >= next {
                self.next_index = index.checked_add(1);
            }
        }
        self.entries.insert(key, value)
    }

    /// Insert under the next auto-index and return the key used.
    ///
    /// `None`, with `value` dropped, once no auto-index is left.
    pub fn append(&mut self, value: Value) -> Option<Key> {
        let key = Key::Index(self.next_index?);
        self.set(key, value);
        Some(key)
    }

    /// Remove `key`; the remaining entries keep their order.
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        self.entries.shift_remove(&key)
    }

    /// Splice `entries` in: index keys are re-numbered by appending,
    /// badges are set.
    pub fn expand<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        for (key, value) in entries {
            match key {
                Key::Index(_) => {
                    self.append(value);
                }
                Key::Badge(_) => {
                    self.set(key, value);
                }
            }
        }
    }

    /// Entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.keys().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index the next `append` will use, `None` once none is left.
    #[inline]
    pub fn next_index(&self) -> Option<u64> {
        self.next_index
    }
}

impl PartialEq for WryArray {
    /// Same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl FromIterator<(Key, Value)> for WryArray {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut array = WryArray::new();
        for (key, value) in iter {
            array.set(key, value);
        }
        array
    }
}

impl FromIterator<Value> for WryArray {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut array = WryArray::new();
        for value in iter {
            array.append(value);
        }
        array
    }
}

impl IntoIterator for WryArray {
    type Item = (Key, Value);
    type IntoIter = IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a WryArray {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests;
