//! Runtime fault to diagnostic conversion (E6xxx codes).

use wry_diagnostic::{Diagnostic, ErrorCode};

use super::{EvalError, EvalErrorKind};

/// Convert an uncaught fault into a `Diagnostic`.
///
/// The primary label sits on the fault's span; notes carry the offending
/// name and the call stack.
pub fn to_diagnostic(err: &EvalError) -> Diagnostic {
    let mut diag = Diagnostic::error(error_code_for_kind(&err.kind)).with_message(&err.message);

    if let Some(span) = err.span {
        diag = diag.with_label(span, label_for_kind(&err.kind));
    }

    for note in &err.notes {
        diag = diag.with_note(note);
    }

    if let Some(bt) = &err.backtrace {
        if !bt.is_empty() {
            diag = diag.with_note(format!("call stack:\n{bt}"));
        }
    }

    if let Some(suggestion) = suggestion_for_kind(&err.kind) {
        diag = diag.with_suggestion(suggestion);
    }

    diag
}

/// Map a fault kind to its error code.
pub fn error_code_for_kind(kind: &EvalErrorKind) -> ErrorCode {
    match kind {
        EvalErrorKind::UnboundName { .. } => ErrorCode::E6001,
        EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6002,
        EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6003,
        EvalErrorKind::DivisionByZero => ErrorCode::E6004,
        EvalErrorKind::KeyNotFound { .. } => ErrorCode::E6005,
        EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6006,
        EvalErrorKind::RecursionLimit { .. } => ErrorCode::E6007,
        EvalErrorKind::Raised { .. } => ErrorCode::E6008,
        EvalErrorKind::Custom { .. } => ErrorCode::E6099,
    }
}

fn label_for_kind(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::UnboundName { .. } => "not bound in this scope",
        EvalErrorKind::TypeMismatch { .. } => "type mismatch",
        EvalErrorKind::ArityMismatch { .. } => "arguments do not match parameters",
        EvalErrorKind::DivisionByZero => "division by zero here",
        EvalErrorKind::KeyNotFound { .. } => "key not found",
        EvalErrorKind::IntegerOverflow { .. } => "overflow occurred here",
        EvalErrorKind::RecursionLimit { .. } => "call depth limit reached here",
        EvalErrorKind::Raised { .. } => "raised here",
        EvalErrorKind::Custom { .. } => "runtime error",
    }
}

fn suggestion_for_kind(kind: &EvalErrorKind) -> Option<String> {
    match kind {
        EvalErrorKind::DivisionByZero => Some("check the divisor before dividing".to_string()),
        EvalErrorKind::Raised { .. } => {
            Some("wrap the code in `try { ... } catch e { ... }` to handle it".to_string())
        }
        EvalErrorKind::RecursionLimit { .. } => {
            Some("raise the limit with `--max-depth=N` if the recursion is intended".to_string())
        }
        _ => None,
    }
}
