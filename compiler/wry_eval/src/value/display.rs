//! User-facing rendering of values.
//!
//! ```text
//! [1, 2, name: "x", 7: true]
//! ```
//!
//! Index entries that sit where auto-indexing would have put them print
//! bare; everything else prints as `key: value`. Strings print raw at the
//! top level and quoted inside arrays.

use std::fmt::{self, Write};

use wry_ir::{Key, Name, StringLookup};

use super::Value;

/// [`Value`] formatter borrowing an interner.
pub struct ValueDisplay<'a, I: ?Sized> {
    value: &'a Value,
    interner: &'a I,
    nested: bool,
}

impl<'a, I: StringLookup + ?Sized> ValueDisplay<'a, I> {
    pub(super) fn new(value: &'a Value, interner: &'a I) -> Self {
        ValueDisplay {
            value,
            interner,
            nested: false,
        }
    }

    fn nested(value: &'a Value, interner: &'a I) -> Self {
        ValueDisplay {
            value,
            interner,
            nested: true,
        }
    }
}

impl<I: StringLookup + ?Sized> fmt::Display for ValueDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) if self.nested => write_quoted(f, s),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => {
                let prefix = if func.is_native() { "native func" } else { "func" };
                if func.name == Name::EMPTY {
                    write!(f, "<{prefix}>")
                } else {
                    write!(f, "<{prefix} {}>", self.interner.lookup(func.name))
                }
            }
            Value::Array(array) => {
                let flat = array.flatten();
                let mut expected = 0u64;
                f.write_char('[')?;
                for (i, (key, value)) in flat.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match *key {
                        Key::Index(index) if index == expected => {}
                        Key::Index(index) => write!(f, "{index}: ")?,
                        Key::Badge(name) => {
                            write_badge(f, self.interner.lookup(name))?;
                            f.write_str(": ")?;
                        }
                    }
                    if let Key::Index(index) = *key {
                        if index >= expected {
                            expected = index.saturating_add(1);
                        }
                    }
                    write!(f, "{}", ValueDisplay::nested(value, self.interner))?;
                }
                f.write_char(']')
            }
        }
    }
}

/// Badges that are plain identifiers print bare, others quoted.
fn write_badge(f: &mut fmt::Formatter<'_>, badge: &str) -> fmt::Result {
    let mut chars = badge.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_ident {
        f.write_str(badge)
    } else {
        write_quoted(f, badge)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
