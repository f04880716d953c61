//! Tests for binary operator implementations.

use pretty_assertions::assert_eq;
use wry_ir::{BinaryOp, Key, StringInterner};

use crate::operators::evaluate_binary;
use crate::{FunctionValue, Value, WryArray};

fn eval(left: Value, right: Value, op: BinaryOp) -> Value {
    evaluate_binary(&left, &right, op).unwrap()
}

fn fault(left: Value, right: Value, op: BinaryOp) -> &'static str {
    evaluate_binary(&left, &right, op).unwrap_err().kind.name()
}

#[test]
fn test_int_operations() {
    assert_eq!(eval(Value::Int(2), Value::Int(3), BinaryOp::Add), Value::Int(5));
    assert_eq!(eval(Value::Int(5), Value::Int(3), BinaryOp::Sub), Value::Int(2));
    assert_eq!(eval(Value::Int(2), Value::Int(3), BinaryOp::Mul), Value::Int(6));
    assert_eq!(eval(Value::Int(7), Value::Int(2), BinaryOp::Div), Value::Int(3));
    assert_eq!(eval(Value::Int(-7), Value::Int(2), BinaryOp::Div), Value::Int(-3));
    assert_eq!(eval(Value::Int(7), Value::Int(2), BinaryOp::Mod), Value::Int(1));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(fault(Value::Int(1), Value::Int(0), BinaryOp::Div), "DivisionByZero");
    assert_eq!(fault(Value::Int(1), Value::Int(0), BinaryOp::Mod), "DivisionByZero");
    assert_eq!(
        fault(Value::Float(1.0), Value::Int(0), BinaryOp::Div),
        "DivisionByZero"
    );
    assert_eq!(
        fault(Value::Int(1), Value::Float(0.0), BinaryOp::Div),
        "DivisionByZero"
    );
    assert_eq!(
        fault(Value::Float(1.0), Value::Float(-0.0), BinaryOp::Mod),
        "DivisionByZero"
    );
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        fault(Value::Int(i64::MAX), Value::Int(1), BinaryOp::Add),
        "IntegerOverflow"
    );
    assert_eq!(
        fault(Value::Int(i64::MIN), Value::Int(1), BinaryOp::Sub),
        "IntegerOverflow"
    );
    assert_eq!(
        fault(Value::Int(i64::MAX), Value::Int(2), BinaryOp::Mul),
        "IntegerOverflow"
    );
    assert_eq!(
        fault(Value::Int(i64::MIN), Value::Int(-1), BinaryOp::Div),
        "IntegerOverflow"
    );
}

#[test]
fn test_mixed_numeric_promotes_to_float() {
    assert_eq!(eval(Value::Int(1), Value::Float(0.5), BinaryOp::Add), Value::Float(1.5));
    assert_eq!(eval(Value::Float(3.0), Value::Int(2), BinaryOp::Div), Value::Float(1.5));
    assert_eq!(eval(Value::Int(2), Value::Float(2.0), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(eval(Value::Int(1), Value::Float(1.5), BinaryOp::Lt), Value::Bool(true));
}

#[test]
fn test_comparisons() {
    assert_eq!(eval(Value::Int(2), Value::Int(3), BinaryOp::Lt), Value::Bool(true));
    assert_eq!(eval(Value::Int(3), Value::Int(2), BinaryOp::Gt), Value::Bool(true));
    assert_eq!(eval(Value::Int(2), Value::Int(2), BinaryOp::LtEq), Value::Bool(true));
    assert_eq!(eval(Value::Int(2), Value::Int(2), BinaryOp::GtEq), Value::Bool(true));
    assert_eq!(eval(Value::Int(2), Value::Int(2), BinaryOp::NotEq), Value::Bool(false));
}

#[test]
fn test_nan_is_unordered() {
    let nan = || Value::Float(f64::NAN);
    assert_eq!(eval(nan(), nan(), BinaryOp::Eq), Value::Bool(false));
    assert_eq!(eval(nan(), nan(), BinaryOp::NotEq), Value::Bool(true));
    assert_eq!(eval(nan(), Value::Float(1.0), BinaryOp::Lt), Value::Bool(false));
}

#[test]
fn test_string_operations() {
    assert_eq!(
        eval(Value::string("hello"), Value::string(" world"), BinaryOp::Add),
        Value::string("hello world")
    );
    assert_eq!(
        eval(Value::string("abc"), Value::string("abd"), BinaryOp::Lt),
        Value::Bool(true)
    );
    assert_eq!(
        eval(Value::string("a"), Value::string("a"), BinaryOp::Eq),
        Value::Bool(true)
    );
    assert_eq!(
        fault(Value::string("a"), Value::string("b"), BinaryOp::Mul),
        "TypeMismatch"
    );
}

#[test]
fn test_bool_supports_only_equality() {
    assert_eq!(eval(Value::Bool(true), Value::Bool(true), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(
        eval(Value::Bool(true), Value::Bool(false), BinaryOp::NotEq),
        Value::Bool(true)
    );
    assert_eq!(
        fault(Value::Bool(true), Value::Bool(false), BinaryOp::Lt),
        "TypeMismatch"
    );
    assert_eq!(
        fault(Value::Bool(true), Value::Bool(false), BinaryOp::Add),
        "TypeMismatch"
    );
}

#[test]
fn test_null_equals_only_null() {
    assert_eq!(eval(Value::Null, Value::Null, BinaryOp::Eq), Value::Bool(true));
    assert_eq!(eval(Value::Null, Value::Int(0), BinaryOp::Eq), Value::Bool(false));
    assert_eq!(eval(Value::string(""), Value::Null, BinaryOp::NotEq), Value::Bool(true));
    assert_eq!(fault(Value::Null, Value::Int(0), BinaryOp::Lt), "TypeMismatch");
    assert_eq!(fault(Value::Null, Value::Null, BinaryOp::Add), "TypeMismatch");
}

#[test]
fn test_cross_kind_is_type_mismatch() {
    assert_eq!(fault(Value::Int(1), Value::string("1"), BinaryOp::Eq), "TypeMismatch");
    assert_eq!(fault(Value::Int(1), Value::Bool(true), BinaryOp::Add), "TypeMismatch");
    let err = evaluate_binary(&Value::Int(1), &Value::string("x"), BinaryOp::Add).unwrap_err();
    assert_eq!(
        err.message,
        "type mismatch: operator `+` cannot be applied to int and str"
    );
}

#[test]
fn test_arrays_compare_structurally() {
    let interner = StringInterner::new();
    let x = Key::Badge(interner.intern("x"));
    let make = |n: i64| {
        let mut array = WryArray::new();
        array.set(x, Value::Int(n));
        Value::array(array)
    };

    assert_eq!(eval(make(1), make(1), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(eval(make(1), make(2), BinaryOp::NotEq), Value::Bool(true));
    assert_eq!(fault(make(1), make(1), BinaryOp::Lt), "TypeMismatch");
    assert_eq!(fault(make(1), make(1), BinaryOp::Add), "TypeMismatch");
}

#[test]
fn test_array_equality_mixes_numbers_like_scalars() {
    let ints: WryArray = [Value::Int(1), Value::Int(2)].into_iter().collect();
    let floats: WryArray = [Value::Float(1.0), Value::Float(2.0)].into_iter().collect();
    let nested_ints: WryArray = [Value::array(ints.clone())].into_iter().collect();
    let nested_floats: WryArray = [Value::array(floats.clone())].into_iter().collect();

    assert_eq!(eval(Value::Int(1), Value::Float(1.0), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(
        eval(Value::array(ints.clone()), Value::array(floats), BinaryOp::Eq),
        Value::Bool(true)
    );
    assert_eq!(
        eval(Value::array(nested_ints), Value::array(nested_floats), BinaryOp::NotEq),
        Value::Bool(false)
    );

    let halves: WryArray = [Value::Float(1.5), Value::Float(2.0)].into_iter().collect();
    assert_eq!(
        eval(Value::array(ints), Value::array(halves), BinaryOp::Eq),
        Value::Bool(false)
    );
}

#[test]
fn test_functions_compare_by_identity() {
    let interner = StringInterner::new();
    let f = Value::function(FunctionValue::native(interner.intern("f"), |_| {
        Ok(Value::Null)
    }));
    let g = Value::function(FunctionValue::native(interner.intern("f"), |_| {
        Ok(Value::Null)
    }));

    assert_eq!(eval(f.clone(), f.clone(), BinaryOp::Eq), Value::Bool(true));
    assert_eq!(eval(f.clone(), g, BinaryOp::Eq), Value::Bool(false));
    assert_eq!(fault(f.clone(), f, BinaryOp::Lt), "TypeMismatch");
}
