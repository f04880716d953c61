use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_locate_across_lines() {
    let map = SourceMap::new("t.wry", "abc\ndefgh\nij");
    assert_eq!(map.locate(0), (1, 1));
    assert_eq!(map.locate(2), (1, 3));
    assert_eq!(map.locate(3), (1, 4));
    assert_eq!(map.locate(4), (2, 1));
    assert_eq!(map.locate(7), (2, 4));
    assert_eq!(map.locate(10), (3, 1));
}

#[test]
fn test_columns_count_chars_not_bytes() {
    // `x` sits at byte 11 after ten characters.
    let map = SourceMap::new("t.wry", "s = \"é\" + x");
    assert_eq!(map.locate(11), (1, 11));
}

#[test]
fn test_empty_lines_and_trailing_newline() {
    let map = SourceMap::new("t.wry", "a = 1\n\nfunc f() {\n}\n");
    assert_eq!(map.line_count(), 5);
    assert_eq!(map.locate(6), (2, 1));
    assert_eq!(map.locate(7), (3, 1));
    assert_eq!(map.line(2), Some(""));
    assert_eq!(map.line(5), Some(""));
}

#[test]
fn test_line_text() {
    let map = SourceMap::new("t.wry", "first\r\nsecond\nthird");
    assert_eq!(map.line(1), Some("first"));
    assert_eq!(map.line(2), Some("second"));
    assert_eq!(map.line(3), Some("third"));
    assert_eq!(map.line(0), None);
    assert_eq!(map.line(4), None);
}

#[test]
fn test_offset_past_end_clamps() {
    let map = SourceMap::new("t.wry", "ab");
    assert_eq!(map.locate(10), (1, 3));
    assert_eq!(map.name(), "t.wry");
    assert_eq!(map.text(), "ab");
}
