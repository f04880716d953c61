//! `InterpreterBuilder` for configuring limits and host globals.

use wry_ir::{Key, SharedArena, StringInterner};

use super::{Interpreter, WellKnownNames};
use crate::call_stack::CallStack;
use crate::{Chain, EvalResult, Frame, FunctionValue, Value, WryArray, DEFAULT_MAX_CALL_DEPTH};

/// Builder for [`Interpreter`].
///
/// ```ignore
/// let mut interp = InterpreterBuilder::new(&interner, output.arena.clone())
///     .max_call_depth(64)
///     .global("answer", Value::Int(42))
///     .build();
/// ```
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: SharedArena,
    max_call_depth: usize,
    globals: WryArray,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        InterpreterBuilder {
            interner,
            arena,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            globals: WryArray::new(),
        }
    }

    /// Maximum number of nested function calls before `RecursionLimit`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Bind `name` in the global frame.
    #[must_use]
    pub fn global(mut self, name: &str, value: Value) -> Self {
        let key = Key::Badge(self.interner.intern(name));
        self.globals.set(key, value);
        self
    }

    /// Bind a host function in the global frame.
    #[must_use]
    pub fn native<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&WryArray) -> EvalResult + 'static,
    {
        let function = FunctionValue::native(self.interner.intern(name), f);
        self.global(name, Value::function(function))
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: Chain::from_frame(Frame::new(self.globals)),
            call_stack: CallStack::new(self.max_call_depth),
            names: WellKnownNames::new(self.interner),
        }
    }
}
