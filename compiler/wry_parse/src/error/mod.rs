//! Parse errors.
//!
//! The parser stops at the first error, so a `ParseError` is always the
//! single reason a script was rejected. Constructors are `#[cold]`.

mod context;

pub use context::ErrorContext;

use thiserror::Error;
use wry_diagnostic::{Diagnostic, ErrorCode, Label};
use wry_ir::{Span, TokenKind};

/// A syntax error with the context needed for a diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// What was being parsed.
    pub context: Option<ErrorContext>,
    /// Related locations, such as the opening delimiter.
    pub related: Vec<Label>,
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: Vec::new(),
            help: Vec::new(),
        }
    }

    /// `expected X, found Y`.
    #[cold]
    pub fn unexpected_token(expected: &str, found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {found}"),
            span,
        )
    }

    #[cold]
    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected expression, found {found}"),
            span,
        )
    }

    /// A delimiter opened at `open` was never closed.
    #[cold]
    pub fn unclosed_delimiter(open: TokenKind, open_span: Span, found: TokenKind, span: Span) -> Self {
        let mut err = ParseError::new(
            ErrorCode::E1003,
            format!("unclosed delimiter {open}, found {found}"),
            span,
        );
        err.related
            .push(Label::secondary(open_span, "unclosed delimiter opened here"));
        err
    }

    #[cold]
    pub fn expected_identifier(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found {found}"),
            span,
        )
    }

    #[cold]
    pub fn expected_block(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("expected block, found {found}"),
            span,
        )
        .with_help("blocks are written `{ ... }`")
    }

    #[cold]
    pub fn invalid_assignment_target(span: Span) -> Self {
        ParseError::new(ErrorCode::E1006, "invalid assignment target", span)
            .with_help("only a name or a `@key` badge can be assigned")
    }

    /// `break`/`continue` with no enclosing `for` in the same function.
    #[cold]
    pub fn outside_loop(keyword: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1007,
            format!("{keyword} outside of a loop"),
            span,
        )
    }

    #[cold]
    pub fn chained_comparison(span: Span) -> Self {
        ParseError::new(ErrorCode::E1008, "comparison operators cannot be chained", span)
            .with_help("combine the comparisons with `and`")
    }

    /// `catch Kind { .. }` would bind the fault to a variable named after a
    /// kind and catch everything.
    #[cold]
    pub fn kind_as_catch_binding(kind: &str, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1009,
            format!("`{kind}` names a fault kind, not a variable"),
            span,
        )
        .with_help(format!(
            "write `catch {kind} as err` to catch only `{kind}` faults"
        ))
    }

    /// Attach a context unless a more specific one is already set.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label_for(self.code));
        diag.labels.extend(self.related.iter().cloned());
        if let Some(ctx) = self.context {
            diag = diag.with_note(format!("while parsing {}", ctx.description()));
        }
        for help in &self.help {
            diag = diag.with_suggestion(help);
        }
        diag
    }
}

fn label_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::E1002 => "expected an expression here",
        ErrorCode::E1003 => "delimiter not closed before this",
        ErrorCode::E1004 => "expected a name here",
        ErrorCode::E1005 => "expected `{` here",
        ErrorCode::E1006 => "cannot assign to this",
        ErrorCode::E1007 => "not inside a `for` loop",
        ErrorCode::E1008 => "second comparison here",
        ErrorCode::E1009 => "add `as <name>` after this kind",
        _ => "unexpected token",
    }
}
