//! Expression evaluation.

use wry_ir::{BinaryOp, EntryKind, EntryRange, ExprId, ExprKind, Key, Span};
use wry_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    expected_kind, invalid_key, key_not_found, not_callable, unbound_name, EvalError, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::unary_operators::{evaluate_unary, to_condition};
use crate::{FunctionValue, Value, WryArray};

impl Interpreter<'_> {
    /// Evaluate an expression.
    pub(crate) fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.expr(id);
        self.eval_expr_kind(expr.kind, expr.span)
            .map_err(|err| err.or_span(expr.span))
    }

    fn eval_expr_kind(&mut self, kind: ExprKind, span: Span) -> EvalResult {
        match kind {
            ExprKind::Null => Ok(Value::Null),
            ExprKind::Bool(b) => Ok(Value::Bool(b)),
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(bits))),
            ExprKind::Str(text) => Ok(Value::string(self.interner.lookup(text))),

            ExprKind::Ident(name) => self.lookup_key(Key::Badge(name)),
            ExprKind::Badge(key) => self.lookup_key(key),
            ExprKind::Member { receiver, key } => {
                let receiver = self.eval_expr(receiver)?;
                self.lookup_member(&receiver, key)
            }
            ExprKind::Index { receiver, key } => {
                let receiver = self.eval_expr(receiver)?;
                let key_value = self.eval_expr(key)?;
                let key = self.value_to_key(&key_value)?;
                self.lookup_member(&receiver, key)
            }

            ExprKind::Array(entries) | ExprKind::Args(entries) => {
                self.eval_entries(entries).map(Value::array)
            }

            ExprKind::Binary {
                op: op @ (BinaryOp::And | BinaryOp::Or),
                left,
                right,
            } => self.eval_logical(op, left, right),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, &right, op)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(&operand, op)
            }

            ExprKind::Compose { left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::compose(&left, &right)
            }
            ExprKind::Call { func, args } => {
                let callee = self.eval_expr(func)?;
                let args = self.eval_entries(args)?;
                match callee {
                    Value::Function(function) => self.call_function(&function, args, Some(span)),
                    other => Err(not_callable(other.type_name())),
                }
            }

            ExprKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.env.bind_local(target, value.clone());
                Ok(value)
            }

            ExprKind::Func(func) => {
                let name = self.arena.func(func).name;
                let function =
                    FunctionValue::script(name, func, self.arena.clone(), self.env.clone());
                Ok(Value::function(function))
            }
        }
    }

    /// `and`/`or` with short-circuit; operands are conditions.
    fn eval_logical(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let what = if op == BinaryOp::And { "`and`" } else { "`or`" };
        let left = self.eval_expr(left)?;
        let left = to_condition(&left, what)?;
        match (op, left) {
            (BinaryOp::And, false) => return Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => return Ok(Value::Bool(true)),
            _ => {}
        }
        let right = self.eval_expr(right)?;
        to_condition(&right, what).map(Value::Bool)
    }

    /// Resolve a name or badge in the execution chain.
    fn lookup_key(&self, key: Key) -> EvalResult {
        self.env
            .resolve(key)
            .map(|(value, _)| value)
            .ok_or_else(|| unbound_name(&key.display(self.interner).to_string()))
    }

    /// Resolve `key` in the receiver array's chain.
    fn lookup_member(&self, receiver: &Value, key: Key) -> EvalResult {
        let Some(array) = receiver.as_array() else {
            return Err(expected_kind("member lookup", "array", receiver.type_name()));
        };
        array
            .get(key)
            .ok_or_else(|| key_not_found(&key.display(self.interner).to_string()))
    }

    /// Computed key: non-negative Int or Str.
    fn value_to_key(&self, value: &Value) -> Result<Key, EvalError> {
        match value {
            Value::Int(n) => u64::try_from(*n)
                .map(Key::Index)
                .map_err(|_| invalid_key("negative int")),
            Value::Str(text) => Ok(Key::Badge(self.interner.intern(text))),
            other => Err(invalid_key(other.type_name())),
        }
    }

    /// Build a container from array-literal or argument-list entries.
    pub(crate) fn eval_entries(&mut self, range: EntryRange) -> Result<WryArray, EvalError> {
        let arena = self.arena.clone();
        let entries = arena.entries(range);
        let mut array = WryArray::with_capacity(entries.len());
        for entry in entries {
            match entry.kind {
                EntryKind::Item(expr) => {
                    let value = self.eval_expr(expr)?;
                    array.append(value);
                }
                EntryKind::Keyed { key, value } => {
                    let value = self.eval_expr(value)?;
                    array.set(key, value);
                }
                EntryKind::Expand(name) => {
                    let value = self
                        .lookup_key(Key::Badge(name))
                        .map_err(|err| err.or_span(entry.span))?;
                    let Some(spread) = value.as_array() else {
                        return Err(expected_kind("`...`", "array", value.type_name())
                            .with_span(entry.span));
                    };
                    array.expand(spread.flatten());
                }
            }
        }
        Ok(array)
    }
}
