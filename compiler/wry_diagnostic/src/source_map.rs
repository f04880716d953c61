//! Mapping byte offsets in a named script to lines and columns.

/// A script's text together with the offsets its lines start at.
///
/// ```
/// use wry_diagnostic::source_map::SourceMap;
///
/// let map = SourceMap::new("demo.wry", "a = 1\nb = 2");
/// assert_eq!(map.locate(0), (1, 1));
/// assert_eq!(map.locate(8), (2, 3));
/// assert_eq!(map.line(2), Some("b = 2"));
/// ```
#[derive(Clone, Debug)]
pub struct SourceMap {
    name: String,
    text: String,
    /// Byte offset of every line start; the first entry is always 0.
    starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(at, _)| at + 1))
            .collect();
        SourceMap {
            name: name.into(),
            text,
            starts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 1-based `(line, column)` of `offset`. Columns count characters.
    /// Offsets past the end land just after the last character.
    pub fn locate(&self, offset: u32) -> (u32, u32) {
        let offset = (offset as usize).min(self.text.len());
        let index = self
            .starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.starts.get(index).copied().unwrap_or(0);
        let column = self
            .text
            .get(start..offset)
            .map_or(0, |before| before.chars().count());
        (one_based(index), one_based(column))
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.starts.get(index)?;
        let end = self
            .starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.text.len());
        self.text
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

fn one_based(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |n| n.saturating_add(1))
}

#[cfg(test)]
mod tests;
