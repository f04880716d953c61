//! Names the interpreter looks up on every `with` and `catch`.

use wry_ir::{Name, StringInterner};

/// Pre-interned badges, compared as `u32`s on the hot path.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WellKnownNames {
    /// `with` resource hooks.
    pub(crate) enter: Name,
    pub(crate) release: Name,
    /// Fault value fields.
    pub(crate) kind: Name,
    pub(crate) message: Name,
    pub(crate) name: Name,
}

impl WellKnownNames {
    pub(crate) fn new(interner: &StringInterner) -> Self {
        WellKnownNames {
            enter: interner.intern("enter"),
            release: interner.intern("release"),
            kind: interner.intern("kind"),
            message: interner.intern("message"),
            name: interner.intern("name"),
        }
    }
}
