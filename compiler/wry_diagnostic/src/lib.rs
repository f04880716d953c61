//! Diagnostics for Wry.
//!
//! Every user-facing failure (lexical, syntactic or runtime) is turned into
//! a [`Diagnostic`] carrying:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - labelled spans saying where
//! - optional notes and help lines
//!
//! Rendering is done by an emitter; see [`emitter::TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod source_map;

pub use diagnostic::{Diagnostic, Label, LabelStyle, Severity};
pub use error_code::{ErrorCode, Phase};
