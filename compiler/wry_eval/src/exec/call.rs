//! Argument binding for function execution.
//!
//! Binding order:
//! 1. Badge arguments bind the parameter of the same name. Unknown badges go
//!    to the `...rest` parameter, or fault without one.
//! 2. Positional (index-keyed) arguments fill the remaining parameters in
//!    order. Leftovers go to `...rest`, or fault without one.
//! 3. Unfilled parameters with defaults are reported back so the caller can
//!    evaluate the defaults inside the new frame; unfilled parameters without
//!    one fault.

use wry_ir::{ExprId, Key, Name, Param, StringInterner};

use crate::errors::{missing_argument, too_many_arguments, unknown_argument, EvalError};
use crate::{Value, WryArray};

/// Result of matching arguments against parameters.
#[derive(Debug)]
pub(crate) struct Bindings {
    /// Parameter bindings for the callee frame.
    pub frame: WryArray,
    /// Parameters still to be bound from their default expression.
    pub defaults: Vec<(Name, ExprId)>,
}

/// Match `args` against `params`.
pub(crate) fn bind_arguments(
    function: &str,
    params: &[Param],
    args: WryArray,
    interner: &StringInterner,
) -> Result<Bindings, EvalError> {
    let has_rest = params.iter().any(|p| p.rest);
    let mut slots: Vec<Option<Value>> = vec![None; params.len()];
    let mut rest = WryArray::new();
    let mut positional = Vec::new();

    for (key, value) in args {
        match key {
            Key::Badge(name) => {
                if let Some(i) = params.iter().position(|p| !p.rest && p.name == name) {
                    slots[i] = Some(value);
                } else if has_rest {
                    rest.set(key, value);
                } else {
                    return Err(unknown_argument(function, interner.lookup(name)));
                }
            }
            Key::Index(_) => positional.push(value),
        }
    }

    let given = positional.len();
    let mut positional = positional.into_iter();
    for (slot, param) in slots.iter_mut().zip(params) {
        if param.rest || slot.is_some() {
            continue;
        }
        match positional.next() {
            Some(value) => *slot = Some(value),
            None => break,
        }
    }
    let leftover: Vec<Value> = positional.collect();
    if !leftover.is_empty() {
        if !has_rest {
            let expected = params.iter().filter(|p| !p.rest).count();
            return Err(too_many_arguments(function, expected, given));
        }
        for value in leftover {
            rest.append(value);
        }
    }

    let mut frame = WryArray::with_capacity(params.len());
    let mut defaults = Vec::new();
    for (slot, param) in slots.into_iter().zip(params) {
        let key = Key::Badge(param.name);
        if param.rest {
            frame.set(key, Value::array(std::mem::take(&mut rest)));
            continue;
        }
        match (slot, param.default) {
            (Some(value), _) => {
                frame.set(key, value);
            }
            (None, Some(default)) => defaults.push((param.name, default)),
            (None, None) => {
                return Err(missing_argument(function, interner.lookup(param.name)));
            }
        }
    }

    Ok(Bindings { frame, defaults })
}
