//! Escape Sequence Processing
//!
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\0`.

/// Resolve a single escape character to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// An unrecognized escape inside a string literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct BadEscape {
    /// Byte offset of the backslash within the literal's content.
    pub offset: usize,
    pub escape_char: char,
}

/// Cook the content of a string literal (quotes already stripped).
pub(crate) fn unescape_string(s: &str) -> Result<String, BadEscape> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        // The literal regex guarantees a character follows every backslash.
        let Some((_, esc)) = chars.next() else {
            return Err(BadEscape {
                offset,
                escape_char: '\\',
            });
        };
        match resolve_escape(esc) {
            Some(resolved) => result.push(resolved),
            None => {
                return Err(BadEscape {
                    offset,
                    escape_char: esc,
                })
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests;
