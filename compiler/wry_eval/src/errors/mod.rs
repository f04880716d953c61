//! Runtime faults and control-flow signals.
//!
//! `EvalErrorKind` is the fault taxonomy; factory functions below are the
//! public way to build errors and fill in both `kind` and `message`.
//! `return`, `break` and `continue` travel on the same channel as faults
//! (`EvalError::control_flow`) so every `?` unwinds through frame guards the
//! same way; `try` never catches them.

mod diagnostics;

use std::fmt;

use wry_ir::Span;

pub use diagnostics::{error_code_for_kind, to_diagnostic};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Non-local exits.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// `return value` out of the enclosing function (or script).
    Return(Value),
    /// `break` out of the enclosing `for`.
    Break,
    /// `continue` with the next iteration of the enclosing `for`.
    Continue,
}

/// Fault category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    /// Name or badge not bound anywhere in the execution chain.
    UnboundName { name: String },
    /// Operator or construct applied to the wrong kind of value.
    TypeMismatch { detail: String },
    /// Arguments do not fit the parameter list.
    ArityMismatch { function: String, detail: String },
    DivisionByZero,
    /// Member or key lookup missed on an array.
    KeyNotFound { key: String },
    IntegerOverflow { operation: &'static str },
    RecursionLimit { limit: usize },
    /// A value thrown by `raise`.
    Raised { value: Value },
    /// Error produced by a host function, and the placeholder kind of
    /// control-flow signals.
    Custom { message: String },
}

impl EvalErrorKind {
    /// Variant name, as written in `catch` kind lists.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnboundName { .. } => "UnboundName",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::ArityMismatch { .. } => "ArityMismatch",
            Self::DivisionByZero => "DivisionByZero",
            Self::KeyNotFound { .. } => "KeyNotFound",
            Self::IntegerOverflow { .. } => "IntegerOverflow",
            Self::RecursionLimit { .. } => "RecursionLimit",
            Self::Raised { .. } => "Raised",
            Self::Custom { .. } => "Custom",
        }
    }

    /// The offending name or key, when there is one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::UnboundName { name } => Some(name),
            Self::KeyNotFound { key } => Some(key),
            Self::ArityMismatch { function, .. } if !function.is_empty() => Some(function),
            _ => None,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundName { name } => write!(f, "unbound name `{name}`"),
            Self::TypeMismatch { detail } => write!(f, "type mismatch: {detail}"),
            Self::ArityMismatch { function, detail } => {
                if function.is_empty() {
                    write!(f, "anonymous function: {detail}")
                } else {
                    write!(f, "`{function}`: {detail}")
                }
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::KeyNotFound { key } => write!(f, "key not found: {key}"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::RecursionLimit { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
            Self::Raised { .. } => write!(f, "uncaught raise"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// One call in a backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Function name, `<anonymous>` for function expressions.
    pub name: String,
    /// Call site.
    pub span: Option<Span>,
}

/// Call stack snapshot taken where a fault left a function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

/// Frames rendered before the rest is summarised.
const BACKTRACE_DISPLAY_LIMIT: usize = 20;

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().take(BACKTRACE_DISPLAY_LIMIT).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {i}: {}", frame.name)?;
            if let Some(span) = frame.span {
                write!(f, " at {span}")?;
            }
        }
        let hidden = self.frames.len().saturating_sub(BACKTRACE_DISPLAY_LIMIT);
        if hidden > 0 {
            write!(f, "\n  ... and {hidden} more")?;
        }
        Ok(())
    }
}

/// Evaluation error: a fault, or a control-flow signal in transit.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for most faults.
    pub message: String,
    /// Set for `return`/`break`/`continue`.
    pub control_flow: Option<ControlFlow>,
    /// Where the fault happened.
    pub span: Option<Span>,
    /// Calls active when the fault left its function.
    pub backtrace: Option<EvalBacktrace>,
    pub notes: Vec<String>,
}

impl EvalError {
    /// Host-defined error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::from_kind_with_message(
            EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        )
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self::from_kind_with_message(kind, message)
    }

    fn from_kind_with_message(kind: EvalErrorKind, message: String) -> Self {
        EvalError {
            kind,
            message,
            control_flow: None,
            span: None,
            backtrace: None,
            notes: Vec::new(),
        }
    }

    fn signal(flow: ControlFlow, message: &str) -> Self {
        let mut err = Self::new(message);
        err.control_flow = Some(flow);
        err
    }

    pub fn return_with(value: Value) -> Self {
        Self::signal(ControlFlow::Return(value), "return outside of a function")
    }

    pub fn break_signal() -> Self {
        Self::signal(ControlFlow::Break, "break outside of a loop")
    }

    pub fn continue_signal() -> Self {
        Self::signal(ControlFlow::Continue, "continue outside of a loop")
    }

    /// Attach a source span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn is_control_flow(&self) -> bool {
        self.control_flow.is_some()
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message)
    }
}

impl std::error::Error for EvalError {}

// Lookup

#[cold]
pub fn unbound_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundName {
        name: name.to_string(),
    })
}

#[cold]
pub fn key_not_found(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound {
        key: key.to_string(),
    })
}

// Kinds

#[cold]
pub fn type_mismatch(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        detail: detail.into(),
    })
}

/// `what` needed an `expected`, got a value of kind `got`.
#[cold]
pub fn expected_kind(what: &str, expected: &str, got: &str) -> EvalError {
    type_mismatch(format!("{what} expects {expected}, got {got}"))
}

#[cold]
pub fn binary_type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    type_mismatch(format!("operator `{op}` cannot be applied to {left} and {right}"))
}

#[cold]
pub fn unary_type_mismatch(op: &str, operand: &str) -> EvalError {
    type_mismatch(format!("operator `{op}` cannot be applied to {operand}"))
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    type_mismatch(format!("{type_name} is not callable"))
}

#[cold]
pub fn invalid_key(type_name: &str) -> EvalError {
    type_mismatch(format!(
        "keys must be non-negative integers or strings, got {type_name}"
    ))
}

// Arity

#[cold]
pub fn missing_argument(function: &str, param: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        detail: format!("missing argument `{param}`"),
    })
}

#[cold]
pub fn too_many_arguments(function: &str, expected: usize, got: usize) -> EvalError {
    let arg_word = if expected == 1 { "argument" } else { "arguments" };
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        detail: format!("expected at most {expected} positional {arg_word}, got {got}"),
    })
}

#[cold]
pub fn unknown_argument(function: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        detail: format!("no parameter named `{name}`"),
    })
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Same kind as division by zero, with its own message.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind_with_message(EvalErrorKind::DivisionByZero, "modulo by zero".to_string())
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Calls

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

/// `raise value`; `message` is the rendered value.
#[cold]
pub fn raised(value: Value, message: String) -> EvalError {
    EvalError::from_kind_with_message(EvalErrorKind::Raised { value }, message)
}

#[cfg(test)]
mod tests;
