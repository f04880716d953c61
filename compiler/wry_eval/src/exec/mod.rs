//! Helpers shared by the statement and expression evaluators.
//!
//! - `call`: argument binding for function execution
//! - `control`: fault matching and fault values for `try`

pub(crate) mod call;
pub(crate) mod control;
