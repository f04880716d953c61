//! Binary operator implementations.
//!
//! Direct enum dispatch over operand kinds. Every accepted combination is
//! listed; the rest are type mismatches. `and`/`or` short-circuit and are
//! handled by the interpreter, not here.

use std::cmp::Ordering;
use std::rc::Rc;

use wry_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, modulo_by_zero, EvalResult,
};
use crate::{ArrayValue, FunctionValue, Value};

/// Checked integer arithmetic; `None` is an overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate `left op right` for every operator except `and`/`or`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(int_to_float(*a), *b, op),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(*a, int_to_float(*b), op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_equality(a == b, op, left, right),
        (Value::Null, _) | (_, Value::Null) => {
            eval_equality(left.is_null() && right.is_null(), op, left, right)
        }
        (Value::Array(a), Value::Array(b)) => eval_array_binary(a, b, op, left, right),
        (Value::Function(a), Value::Function(b)) => eval_function_binary(a, b, op, left, right),
        _ => Err(mismatch(op, left, right)),
    }
}

#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> crate::EvalError {
    binary_type_mismatch(op.as_symbol(), left.type_name(), right.type_name())
}

#[expect(
    clippy::cast_precision_loss,
    reason = "int/float mixing promotes to float by definition"
)]
#[inline]
fn int_to_float(n: i64) -> f64 {
    n as f64
}

/// Binary operations on integers. Division truncates toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => checked_arith(a.checked_div(b), "division"),
        BinaryOp::Mod if b == 0 => Err(modulo_by_zero()),
        BinaryOp::Mod => checked_arith(a.checked_rem(b), "remainder"),
        _ => compare(a.cmp(&b), op).ok_or_else(|| {
            binary_type_mismatch(op.as_symbol(), "int", "int")
        }),
    }
}

/// Binary operations on floats. Zero divisors fault instead of producing
/// infinities.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::Mod if b == 0.0 => Err(modulo_by_zero()),
        BinaryOp::Mod => Ok(Value::Float(a % b)),
        _ => {
            let result = match a.partial_cmp(&b) {
                Some(ordering) => compare(ordering, op),
                // NaN is unordered: every comparison but `!=` is false.
                None => op
                    .is_relational()
                    .then(|| Value::Bool(op == BinaryOp::NotEq)),
            };
            result.ok_or_else(|| binary_type_mismatch(op.as_symbol(), "float", "float"))
        }
    }
}

/// Binary operations on strings: concatenation and lexicographic order.
fn eval_string_binary(a: &Rc<str>, b: &Rc<str>, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        _ => compare(a.as_ref().cmp(b.as_ref()), op)
            .ok_or_else(|| binary_type_mismatch(op.as_symbol(), "str", "str")),
    }
}

/// `==` between values of any kind.
///
/// Ints and floats compare numerically, arrays entry by entry with this same
/// rule, functions by identity. Other cross-kind pairs are unequal.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
            int_to_float(*a) == *b
        }
        (Value::Array(a), Value::Array(b)) => arrays_equal(a, b),
        _ => left == right,
    }
}

/// Same keys in the same order, with `values_equal` values.
fn arrays_equal(a: &ArrayValue, b: &ArrayValue) -> bool {
    let (a, b) = (a.flatten(), b.flatten());
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|((ka, va), (kb, vb))| ka == kb && values_equal(va, vb))
}

/// Arrays compare by their flattened entries.
fn eval_array_binary(
    a: &ArrayValue,
    b: &ArrayValue,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> EvalResult {
    match op {
        BinaryOp::Eq | BinaryOp::NotEq => eval_equality(arrays_equal(a, b), op, left, right),
        _ => Err(mismatch(op, left, right)),
    }
}

/// Functions compare by identity.
fn eval_function_binary(
    a: &Rc<FunctionValue>,
    b: &Rc<FunctionValue>,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> EvalResult {
    eval_equality(Rc::ptr_eq(a, b), op, left, right)
}

/// `==`/`!=` given whether the operands are equal; anything else faults.
fn eval_equality(equal: bool, op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(equal)),
        BinaryOp::NotEq => Ok(Value::Bool(!equal)),
        _ => Err(mismatch(op, left, right)),
    }
}

/// Relational result for an ordering; `None` for non-relational operators.
fn compare(ordering: Ordering, op: BinaryOp) -> Option<Value> {
    let result = match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => return None,
    };
    Some(Value::Bool(result))
}
