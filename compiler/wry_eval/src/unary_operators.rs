//! Unary operator implementations and boolean coercion.

use wry_ir::UnaryOp;

use crate::errors::{expected_kind, integer_overflow, unary_type_mismatch, EvalError, EvalResult};
use crate::Value;

/// Evaluate `op operand`.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (op, value) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Plus, Value::Int(_) | Value::Float(_)) => Ok(value.clone()),
        (UnaryOp::Not, _) => to_condition(value, "`not`").map(|b| Value::Bool(!b)),
        _ => Err(unary_type_mismatch(op.as_symbol(), value.type_name())),
    }
}

/// Read a value as a condition: booleans as themselves, `null` as false.
///
/// `what` names the construct for the error message.
pub fn to_condition(value: &Value, what: &str) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(false),
        other => Err(expected_kind(what, "bool", other.type_name())),
    }
}
