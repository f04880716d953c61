//! `try`/`catch` support.

use wry_ir::{Key, Name, StringInterner};

use crate::errors::{EvalError, EvalErrorKind};
use crate::interpreter::WellKnownNames;
use crate::{Value, WryArray};

/// Whether a catch clause listing `kinds` recovers from `err`.
///
/// An empty list catches every fault. Control-flow signals are never caught.
pub(crate) fn catches(kinds: &[Name], err: &EvalError, interner: &StringInterner) -> bool {
    if err.is_control_flow() {
        return false;
    }
    let kind = err.kind.name();
    kinds.is_empty() || kinds.iter().any(|k| interner.lookup(*k) == kind)
}

/// The value bound by `catch e`.
///
/// A raised value is bound as-is; other faults become
/// `[kind: "...", message: "...", name: "..."]`, with `name` present only
/// when the fault has a subject.
pub(crate) fn fault_value(err: EvalError, names: &WellKnownNames) -> Value {
    if let EvalErrorKind::Raised { value } = err.kind {
        return value;
    }
    let mut fault = WryArray::with_capacity(3);
    fault.set(Key::Badge(names.kind), Value::string(err.kind.name()));
    fault.set(Key::Badge(names.message), Value::string(err.message.as_str()));
    if let Some(subject) = err.kind.subject() {
        fault.set(Key::Badge(names.name), Value::string(subject));
    }
    Value::array(fault)
}
