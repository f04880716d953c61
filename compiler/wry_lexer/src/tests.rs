use pretty_assertions::assert_eq;
use wry_ir::{Span, StringInterner, TokenKind};

use super::{lex, LexErrorKind};

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner)
        .unwrap()
        .iter()
        .map(|tok| tok.kind)
        .collect()
}

fn lex_err(source: &str) -> super::LexError {
    let interner = StringInterner::new();
    lex(source, &interner).unwrap_err()
}

#[test]
fn test_empty_source_is_just_eof() {
    let interner = StringInterner::new();
    assert_eq!(kinds("", &interner), vec![TokenKind::Eof]);
    assert_eq!(kinds("   \t  ", &interner), vec![TokenKind::Eof]);
}

#[test]
fn test_keywords_and_identifiers() {
    let interner = StringInterner::new();
    let iffy = interner.intern("iffy");
    let x = interner.intern("x");
    assert_eq!(
        kinds("if iffy and not x", &interner),
        vec![
            TokenKind::If,
            TokenKind::Ident(iffy),
            TokenKind::And,
            TokenKind::Not,
            TokenKind::Ident(x),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_all_keywords() {
    let interner = StringInterner::new();
    let source = "and as break catch continue do elif else false for from func if in \
                  inherit not null or raise return true try with";
    let toks = kinds(source, &interner);
    assert_eq!(toks.len(), 24);
    assert!(toks[..23]
        .iter()
        .all(|kind| !matches!(kind, TokenKind::Ident(_))));
}

#[test]
fn test_operators_and_delimiters() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("( ) [ ] { } , : ; . ... @ & = == != < <= > >= + - * / %", &interner),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Ellipsis,
            TokenKind::At,
            TokenKind::Amp,
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("0 42 1_000 2.5 1.0e3", &interner),
        vec![
            TokenKind::Int(0),
            TokenKind::Int(42),
            TokenKind::Int(1000),
            TokenKind::Float(2.5f64.to_bits()),
            TokenKind::Float(1000.0f64.to_bits()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_member_chain_splits_float() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let tokens = lex("a.0.1", &interner).unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident(a),
            TokenKind::Dot,
            TokenKind::Int(0),
            TokenKind::Dot,
            TokenKind::Int(1),
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[2].span, Span::new(2, 3));
    assert_eq!(tokens[3].span, Span::new(3, 4));
    assert_eq!(tokens[4].span, Span::new(4, 5));
}

#[test]
fn test_strings_are_cooked_and_interned() {
    let interner = StringInterner::new();
    let toks = kinds(r#""a\tb" "x y""#, &interner);
    let TokenKind::Str(first) = toks[0] else {
        panic!("expected string, got {:?}", toks[0]);
    };
    assert_eq!(interner.lookup(first), "a\tb");
    assert_eq!(toks[1], TokenKind::Str(interner.intern("x y")));
}

#[test]
fn test_comments_dropped_newlines_kept() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        kinds("x # trailing comment\n# whole line\nx", &interner),
        vec![
            TokenKind::Ident(x),
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Ident(x),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let tokens = lex("ab = 12", &interner).unwrap();
    assert_eq!(tokens[0].span, Span::new(0, 2));
    assert_eq!(tokens[1].span, Span::new(3, 4));
    assert_eq!(tokens[2].span, Span::new(5, 7));
    assert_eq!(tokens[3].span, Span::point(7));
}

#[test]
fn test_unterminated_string() {
    let err = lex_err("x = \"abc\ny");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(4, 8));
}

#[test]
fn test_invalid_character() {
    let err = lex_err("a $ b");
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter('$'));
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn test_invalid_escape_points_at_escape() {
    let err = lex_err(r#"s = "ok\q""#);
    assert_eq!(err.kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(err.span, Span::new(7, 9));
}

#[test]
fn test_integer_overflow_is_lex_error() {
    let err = lex_err("99999999999999999999");
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidNumber("99999999999999999999".to_string())
    );
}
