//! Runtime values.
//!
//! Arrays, records and argument lists are all [`ArrayValue`]s: a [`Chain`]
//! of [`WryArray`] frames whose innermost frame is the array's own
//! container. Literal arrays have one frame; composition and inheritance
//! stack more. Arrays are never mutated once another value shares them.

mod array;
mod display;
mod function;

use std::rc::Rc;

use wry_ir::{Key, StringLookup};

pub use array::WryArray;
pub use display::ValueDisplay;
pub use function::{FunctionKind, FunctionValue, NativeFn, ScriptFunction};

use crate::{Chain, Frame};

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Array(ArrayValue),
    Function(Rc<FunctionValue>),
}

impl Value {
    /// String value.
    #[inline]
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    /// One-frame array over `array`.
    #[inline]
    pub fn array(array: WryArray) -> Self {
        Value::Array(ArrayValue::new(array))
    }

    #[inline]
    pub fn function(function: FunctionValue) -> Self {
        Value::Function(Rc::new(function))
    }

    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<FunctionValue>> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Render for the user; names are resolved through `interner`.
    pub fn display<'a, I: StringLookup + ?Sized>(&'a self, interner: &'a I) -> ValueDisplay<'a, I> {
        ValueDisplay::new(self, interner)
    }
}

impl PartialEq for Value {
    /// Structural for scalars and arrays, identity for functions.
    ///
    /// Kinds never compare equal across variants (`1 != 1.0` here). Script
    /// `==` mixes numbers; see [`values_equal`](crate::values_equal).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<WryArray> for Value {
    fn from(array: WryArray) -> Self {
        Value::array(array)
    }
}

/// An array: a chain of frames, most specific first.
#[derive(Clone, Debug)]
pub struct ArrayValue {
    chain: Chain,
}

impl ArrayValue {
    /// Single-frame array.
    pub fn new(array: WryArray) -> Self {
        ArrayValue {
            chain: Chain::from_frame(Frame::new(array)),
        }
    }

    pub fn from_chain(chain: Chain) -> Self {
        ArrayValue { chain }
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Look `key` up through every frame, innermost first.
    pub fn get(&self, key: Key) -> Option<Value> {
        self.chain.resolve(key).map(|(value, _)| value)
    }

    /// Merged entries, outer frames first, inner entries overriding in place.
    pub fn flatten(&self) -> WryArray {
        self.chain.flatten()
    }

    /// `self`'s frames stacked on top of `base`'s.
    #[must_use]
    pub fn stacked_on(&self, base: &ArrayValue) -> ArrayValue {
        ArrayValue {
            chain: self.chain.stacked_on(&base.chain),
        }
    }

    /// Number of frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain.depth()
    }
}

impl PartialEq for ArrayValue {
    fn eq(&self, other: &Self) -> bool {
        self.chain.ptr_eq(&other.chain) || self.flatten() == other.flatten()
    }
}
