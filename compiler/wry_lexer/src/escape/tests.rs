use super::*;

#[test]
fn test_resolve_escape_valid() {
    assert_eq!(resolve_escape('n'), Some('\n'));
    assert_eq!(resolve_escape('r'), Some('\r'));
    assert_eq!(resolve_escape('t'), Some('\t'));
    assert_eq!(resolve_escape('\\'), Some('\\'));
    assert_eq!(resolve_escape('"'), Some('"'));
    assert_eq!(resolve_escape('0'), Some('\0'));
}

#[test]
fn test_resolve_escape_invalid() {
    assert_eq!(resolve_escape('q'), None);
    assert_eq!(resolve_escape('\''), None);
}

#[test]
fn test_unescape_string() {
    assert_eq!(unescape_string("plain").as_deref(), Ok("plain"));
    assert_eq!(unescape_string(r"a\nb").as_deref(), Ok("a\nb"));
    assert_eq!(unescape_string(r#"say \"hi\""#).as_deref(), Ok("say \"hi\""));
    assert_eq!(unescape_string(r"back\\slash").as_deref(), Ok("back\\slash"));
    assert_eq!(unescape_string(r"nul\0").as_deref(), Ok("nul\0"));
}

#[test]
fn test_unescape_string_reports_bad_escape() {
    assert_eq!(
        unescape_string(r"ab\qc"),
        Err(BadEscape {
            offset: 2,
            escape_char: 'q'
        })
    );
}

#[test]
fn test_unescape_keeps_multibyte_text() {
    assert_eq!(unescape_string("héllo\\t").as_deref(), Ok("héllo\t"));
}
