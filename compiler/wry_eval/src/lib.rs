//! Wry Eval - tree-walking evaluator for Wry scripts.
//!
//! # Architecture
//!
//! - [`WryArray`]: ordered associative container with a running auto-index
//! - [`Chain`]: persistent stack of shared [`Frame`]s used both as the
//!   execution environment and as the representation of composed arrays
//! - [`Value`]: runtime values; arrays are chains, functions carry their
//!   captured chain and pre-bound arguments
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - [`Interpreter`]: statement and expression evaluation, composition and
//!   function execution
//!
//! Faults and control-flow signals share [`EvalError`]; frames are popped by
//! RAII guards on every exit path.

mod call_stack;
mod chain;
pub mod errors;
pub(crate) mod exec;
pub mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use call_stack::{CallFrame, CallStack};
pub use chain::{Chain, Frame, Frames};
pub use errors::{
    error_code_for_kind, to_diagnostic, BacktraceFrame, ControlFlow, EvalBacktrace, EvalError,
    EvalErrorKind, EvalResult,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, values_equal};
pub use unary_operators::{evaluate_unary, to_condition};
pub use value::{
    ArrayValue, FunctionKind, FunctionValue, NativeFn, ScriptFunction, Value, ValueDisplay,
    WryArray,
};

/// Nested function calls allowed before `RecursionLimit`.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 512;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
