//! Lexer error types.

use thiserror::Error;
use wry_diagnostic::{Diagnostic, ErrorCode};
use wry_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character that starts no token.
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    /// Integer does not fit in 64 bits, or a malformed float.
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
    /// Unrecognized escape in a string literal (e.g., `\q`).
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::InvalidNumber(_) => ErrorCode::E0003,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0004,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label_for(&self.kind));
        match &self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_suggestion("add a closing `\"` before the end of the line")
            }
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("valid escapes are \\n \\t \\r \\\\ \\\" and \\0")
            }
            LexErrorKind::InvalidNumber(_) => {
                diag.with_note("integers must fit in a signed 64-bit value")
            }
            LexErrorKind::InvalidCharacter(_) => diag,
        }
    }
}

fn label_for(kind: &LexErrorKind) -> &'static str {
    match kind {
        LexErrorKind::UnterminatedString => "string starts here",
        LexErrorKind::InvalidCharacter(_) => "not valid here",
        LexErrorKind::InvalidNumber(_) => "cannot be represented",
        LexErrorKind::InvalidEscape(_) => "unknown escape",
    }
}
