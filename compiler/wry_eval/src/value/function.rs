//! Function values: script closures and host-provided natives.

use std::fmt;
use std::rc::Rc;

use wry_ir::{FuncDef, FuncId, Name, SharedArena};

use super::WryArray;
use crate::{Chain, EvalResult};

/// Host function signature. Receives the bound argument container.
pub type NativeFn = dyn Fn(&WryArray) -> EvalResult;

/// A callable value.
///
/// Composition never mutates a function: `f & [args]` builds a new
/// `FunctionValue` sharing the same body with more pre-bound arguments.
#[derive(Clone)]
pub struct FunctionValue {
    /// `Name::EMPTY` for anonymous functions.
    pub name: Name,
    pub kind: FunctionKind,
    /// Arguments supplied by composition, placed before call arguments.
    pub bound: WryArray,
}

#[derive(Clone)]
pub enum FunctionKind {
    /// Defined in a script.
    Script(ScriptFunction),
    /// Provided by the embedding host.
    Native(Rc<NativeFn>),
}

/// A script function: definition plus the chain captured at creation time.
#[derive(Clone)]
pub struct ScriptFunction {
    pub def: FuncId,
    /// Arena holding `def`; a function may outlive the script that made it.
    pub arena: SharedArena,
    pub captured: Chain,
}

impl ScriptFunction {
    #[inline]
    pub fn def(&self) -> &FuncDef {
        self.arena.func(self.def)
    }
}

impl FunctionValue {
    pub fn script(name: Name, def: FuncId, arena: SharedArena, captured: Chain) -> Self {
        FunctionValue {
            name,
            kind: FunctionKind::Script(ScriptFunction {
                def,
                arena,
                captured,
            }),
            bound: WryArray::new(),
        }
    }

    pub fn native<F>(name: Name, f: F) -> Self
    where
        F: Fn(&WryArray) -> EvalResult + 'static,
    {
        FunctionValue {
            name,
            kind: FunctionKind::Native(Rc::new(f)),
            bound: WryArray::new(),
        }
    }

    /// A copy with `args` appended to the pre-bound arguments.
    #[must_use]
    pub fn with_bound(&self, args: WryArray) -> Self {
        let mut composed = self.clone();
        composed.bound.expand(args);
        composed
    }

    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(self.kind, FunctionKind::Native(_))
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            FunctionKind::Script(func) => format!("{:?}", func.def),
            FunctionKind::Native(_) => "native".to_string(),
        };
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("bound", &self.bound.len())
            .finish()
    }
}
