use pretty_assertions::assert_eq;
use wry_ir::{StringInterner, TokenKind};

use super::Cursor;

fn tokens(source: &str, interner: &StringInterner) -> wry_ir::TokenList {
    wry_lexer::lex(source, interner).unwrap()
}

#[test]
fn newlines_visible_by_default() {
    let interner = StringInterner::new();
    let list = tokens("a\nb", &interner);
    let mut cursor = Cursor::new(&list, &interner);
    assert!(cursor.check_ident());
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Newline);
}

#[test]
fn bracket_mode_skips_newlines() {
    let interner = StringInterner::new();
    let list = tokens("(\n\na\n,\nb\n)", &interner);
    let mut cursor = Cursor::new(&list, &interner);
    cursor.advance();
    cursor.push_newline_mode(false);
    assert!(cursor.check_ident());
    assert_eq!(cursor.peek_kind(1), TokenKind::Comma);
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Comma);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::RParen);
    cursor.pop_newline_mode();
    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn block_inside_bracket_restores_newlines() {
    let interner = StringInterner::new();
    let list = tokens("a\nb", &interner);
    let mut cursor = Cursor::new(&list, &interner);
    cursor.push_newline_mode(false);
    cursor.push_newline_mode(true);
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Newline);
    cursor.pop_newline_mode();
    cursor.pop_newline_mode();
}

#[test]
fn advance_stops_at_eof() {
    let interner = StringInterner::new();
    let list = tokens("", &interner);
    let mut cursor = Cursor::new(&list, &interner);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
}

#[test]
fn peek_past_newlines_sees_else() {
    let interner = StringInterner::new();
    let list = tokens("\n\nelse", &interner);
    let cursor = Cursor::new(&list, &interner);
    assert_eq!(cursor.current_kind(), TokenKind::Newline);
    assert_eq!(cursor.peek_past_newlines(), TokenKind::Else);
}

#[test]
fn expect_reports_found_token() {
    let interner = StringInterner::new();
    let list = tokens(",", &interner);
    let mut cursor = Cursor::new(&list, &interner);
    let err = cursor.expect(TokenKind::RParen).unwrap_err();
    assert_eq!(err.message, "expected `)`, found `,`");
}

#[test]
fn expect_ident_returns_name() {
    let interner = StringInterner::new();
    let list = tokens("name 1", &interner);
    let mut cursor = Cursor::new(&list, &interner);
    assert_eq!(cursor.expect_ident().unwrap(), interner.intern("name"));
    assert!(cursor.expect_ident().is_err());
}
