//! Tree-walking interpreter for Wry.
//!
//! # Architecture
//!
//! The interpreter walks the flat AST in a [`SharedArena`], one visit per
//! node, against an execution [`Chain`]:
//!
//! - `stmt.rs`: statement forms (`if`, `for`, `try`, `with`, binding blocks,
//!   flow statements)
//! - `expr.rs`: expression forms (operators, lookups, literals, entries)
//! - `function_call.rs`: the composition engine (`&` and calls)
//! - `scope_guard.rs`: RAII guards that push/pop frames and swap chains
//!
//! # Arena threading
//!
//! A function value carries the arena its body lives in. Calling it swaps
//! the interpreter's arena for the callee's until the call returns, so
//! closures stay valid after the script that created them is gone.
//!
//! # Frames
//!
//! The outermost frame holds host globals and top-level bindings. Blocks,
//! loop iterations, `catch` bodies and `with` bodies each run under a fresh
//! frame; function bodies run in the parameter frame pushed on the
//! function's captured chain. Assignment only ever writes the innermost
//! frame.

mod builder;
mod expr;
mod function_call;
mod interned_names;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub(crate) use interned_names::WellKnownNames;
pub use scope_guard::{ScopedInterpreter, SwappedInterpreter};

use wry_ir::{Key, Name, Script, SharedArena, StringInterner};

use crate::call_stack::CallStack;
use crate::errors::{ControlFlow, EvalError, EvalResult};
use crate::{Chain, Value};

/// Tree-walking interpreter.
///
/// Single-threaded and not reentrant: one interpreter evaluates one script
/// at a time.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    /// Arena of the code currently executing.
    pub(crate) arena: SharedArena,
    /// Execution chain; the innermost frame receives assignments.
    pub(crate) env: Chain,
    pub(crate) call_stack: CallStack,
    pub(crate) names: WellKnownNames,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default limits and no host globals.
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Evaluate a whole script in the global frame.
    ///
    /// The result is the value of the last statement, or the value of a
    /// top-level `return`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_script(&mut self, script: &Script) -> EvalResult {
        let result = self.eval_stmts(script.body);
        match result {
            Err(EvalError {
                control_flow: Some(ControlFlow::Return(value)),
                ..
            }) => Ok(value),
            other => {
                if let Err(err) = &other {
                    tracing::debug!(kind = err.kind.name(), "script faulted");
                }
                other
            }
        }
    }

    /// Look `name` up in the execution chain.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let key = Key::Badge(self.interner.intern(name));
        self.env.resolve(key).map(|(value, _)| value)
    }

    /// Bind `name` in the innermost frame.
    pub fn define(&mut self, name: &str, value: Value) {
        let key = Key::Badge(self.interner.intern(name));
        self.env.bind_local(key, value);
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.env
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Number of active function calls.
    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Display label for a function name.
    pub(crate) fn function_label(&self, name: Name) -> String {
        if name == Name::EMPTY {
            "<anonymous>".to_string()
        } else {
            self.interner.lookup(name).to_string()
        }
    }
}
