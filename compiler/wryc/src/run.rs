//! Running a script: read, lex, parse, evaluate, report.

use std::io::{self, Read, Write};
use std::path::Path;

use thiserror::Error;
use wry_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use wry_diagnostic::Diagnostic;
use wry_eval::{EvalError, InterpreterBuilder, Value};
use wry_ir::StringInterner;
use wry_lexer::LexError;
use wry_parse::ParseError;

use crate::config::RunConfig;

/// Exit status for a lexical or syntax error.
pub const EXIT_SYNTAX: u8 = 1;
/// Exit status for an uncaught runtime fault.
pub const EXIT_FAULT: u8 = 2;
/// Exit status for I/O and usage errors.
pub const EXIT_IO: u8 = 3;

/// Why a run failed.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RunError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Io { .. } => EXIT_IO,
            RunError::Lex(_) | RunError::Parse(_) => EXIT_SYNTAX,
            RunError::Eval(_) => EXIT_FAULT,
        }
    }

    /// Source-anchored diagnostic; I/O errors have none.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            RunError::Io { .. } => None,
            RunError::Lex(err) => Some(err.to_diagnostic()),
            RunError::Parse(err) => Some(err.to_diagnostic()),
            RunError::Eval(err) => Some(wry_eval::to_diagnostic(err)),
        }
    }
}

/// A script's name (for diagnostics) and text.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

/// Read the script at `path`, or stdin when there is none.
pub fn read_source(path: Option<&Path>) -> Result<SourceFile, RunError> {
    match path {
        Some(path) => {
            let name = path.display().to_string();
            std::fs::read_to_string(path)
                .map(|text| SourceFile {
                    name: name.clone(),
                    text,
                })
                .map_err(|source| RunError::Io { path: name, source })
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| RunError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(SourceFile {
                name: "<stdin>".to_string(),
                text,
            })
        }
    }
}

/// Evaluate `source` and render its value.
///
/// Returns `None` when the script's value is `null`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_source(source: &str, config: &RunConfig) -> Result<Option<String>, RunError> {
    let interner = StringInterner::new();
    let tokens = wry_lexer::lex(source, &interner)?;
    let output = wry_parse::parse(&tokens, &interner);
    if let Some(err) = output.error {
        return Err(err.into());
    }

    let mut interpreter = InterpreterBuilder::new(&interner, output.arena.clone())
        .max_call_depth(config.max_call_depth)
        .build();
    let value = interpreter.eval_script(&output.script)?;
    tracing::debug!(kind = value.type_name(), "script finished");

    Ok(match value {
        Value::Null => None,
        value => Some(value.display(&interner).to_string()),
    })
}

/// Render `err` onto `writer` in the terminal format.
pub fn render_error<W: Write>(
    writer: W,
    err: &RunError,
    source: Option<&SourceFile>,
    color: ColorMode,
    is_tty: bool,
) -> W {
    let Some(diagnostic) = err.to_diagnostic() else {
        let mut writer = writer;
        let _ = writeln!(writer, "error: {err}");
        return writer;
    };
    let mut emitter = TerminalEmitter::with_color_mode(writer, color, is_tty);
    if let Some(source) = source {
        emitter = emitter.with_source(source.name.as_str(), source.text.as_str());
    }
    emitter.emit(&diagnostic);
    emitter.flush();
    emitter.into_inner()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
