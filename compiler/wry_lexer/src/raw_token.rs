//! The logos-generated scanner.
//!
//! Punctuation maps straight to its [`TokenKind`]. Words, numbers and
//! strings are handed back as bare slices: keywords are told apart from
//! identifiers, numbers are range-checked and strings are unescaped by the
//! caller, which can attach a precise span to any error.

use logos::Logos;
use wry_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"([ \t\r]+|#[^\n]*)")]
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[token("(", |_| TokenKind::LParen)]
    #[token(")", |_| TokenKind::RParen)]
    #[token("[", |_| TokenKind::LBracket)]
    #[token("]", |_| TokenKind::RBracket)]
    #[token("{", |_| TokenKind::LBrace)]
    #[token("}", |_| TokenKind::RBrace)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(":", |_| TokenKind::Colon)]
    #[token(";", |_| TokenKind::Semicolon)]
    #[token(".", |_| TokenKind::Dot)]
    #[token("...", |_| TokenKind::Ellipsis)]
    #[token("@", |_| TokenKind::At)]
    #[token("&", |_| TokenKind::Amp)]
    #[token("=", |_| TokenKind::Eq)]
    #[token("==", |_| TokenKind::EqEq)]
    #[token("!=", |_| TokenKind::NotEq)]
    #[token("<", |_| TokenKind::Lt)]
    #[token("<=", |_| TokenKind::LtEq)]
    #[token(">", |_| TokenKind::Gt)]
    #[token(">=", |_| TokenKind::GtEq)]
    #[token("+", |_| TokenKind::Plus)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("%", |_| TokenKind::Percent)]
    Punct(TokenKind),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Float,

    /// A complete literal on one line.
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    Str,

    /// An opening quote that reaches the end of the line.
    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    OpenStr,
}
