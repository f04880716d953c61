//! Output formats for diagnostics.
//!
//! The driver talks to [`DiagnosticEmitter`]; [`TerminalEmitter`] is the
//! only implementation.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|diag| self.emit(diag));
    }

    fn flush(&mut self);
}
