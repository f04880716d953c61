//! Composition and function execution.
//!
//! `&` only builds values: arrays stack, functions gain pre-bound arguments.
//! Calling runs code: pre-bound entries followed by the call's entries are
//! bound to parameters in a frame pushed on the function's captured chain.

use std::rc::Rc;

use wry_ir::{Key, Name, Span};

use super::Interpreter;
use crate::call_stack::CallFrame;
use crate::errors::{binary_type_mismatch, not_callable, ControlFlow, EvalError, EvalResult};
use crate::exec::call::{bind_arguments, Bindings};
use crate::{Frame, FunctionKind, FunctionValue, ScriptFunction, Value, WryArray};

impl Interpreter<'_> {
    /// `left & right`.
    pub(crate) fn compose(left: &Value, right: &Value) -> EvalResult {
        match (left, right) {
            (Value::Array(base), Value::Array(specific)) => {
                Ok(Value::Array(specific.stacked_on(base)))
            }
            (Value::Function(function), Value::Array(args)) => {
                Ok(Value::function(function.with_bound(args.flatten())))
            }
            _ => Err(binary_type_mismatch(
                "&",
                left.type_name(),
                right.type_name(),
            )),
        }
    }

    /// Call `callee` with `args` from host code.
    pub fn call(&mut self, callee: &Value, args: WryArray) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(function, args, None),
            other => Err(not_callable(other.type_name())),
        }
    }

    pub(crate) fn call_function(
        &mut self,
        function: &Rc<FunctionValue>,
        args: WryArray,
        call_span: Option<Span>,
    ) -> EvalResult {
        let mut merged = function.bound.clone();
        merged.expand(args);

        self.call_stack.push(CallFrame {
            name: function.name,
            call_span,
        })?;
        let result = match &function.kind {
            FunctionKind::Native(native) => native(&merged),
            FunctionKind::Script(script) => self.call_script(function.name, script, merged),
        };
        let result = result.map_err(|err| self.call_stack.attach_backtrace(err, self.interner));
        self.call_stack.pop();
        result
    }

    #[tracing::instrument(level = "debug", skip_all, fields(function = %self.function_label(name)))]
    fn call_script(&mut self, name: Name, script: &ScriptFunction, args: WryArray) -> EvalResult {
        let def = *script.def();
        let label = self.function_label(name);
        let Bindings { frame, defaults } =
            bind_arguments(&label, script.arena.params(def.params), args, self.interner)?;

        let mut chain = script.captured.clone();
        chain.push(Frame::new(frame));
        let mut callee = self.with_chain(chain, Some(script.arena.clone()));
        for (param, default) in defaults {
            let value = callee.eval_expr(default)?;
            callee.env.bind_local(Key::Badge(param), value);
        }

        match callee.eval_stmts(def.body.stmts) {
            Err(EvalError {
                control_flow: Some(ControlFlow::Return(value)),
                ..
            }) => Ok(value),
            other => other,
        }
    }
}
