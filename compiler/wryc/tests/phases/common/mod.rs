//! Shared test utilities for phase tests.

use wry_diagnostic::ErrorCode;
use wryc::{run_source, RunConfig, RunError};

/// Run `source` with default settings.
pub fn run(source: &str) -> Result<Option<String>, RunError> {
    run_source(source, &RunConfig::default())
}

/// Run `source`, expecting a value, and return it rendered.
pub fn value_of(source: &str) -> String {
    match run(source) {
        Ok(Some(text)) => text,
        Ok(None) => "null".to_string(),
        Err(err) => panic!("script failed: {err}\n---\n{source}"),
    }
}

/// Run `source`, expecting it to fail.
pub fn failure_of(source: &str) -> RunError {
    match run(source) {
        Ok(value) => panic!("script succeeded with {value:?}\n---\n{source}"),
        Err(err) => err,
    }
}

/// Error code of the diagnostic `source` fails with.
pub fn code_of(source: &str) -> ErrorCode {
    failure_of(source)
        .to_diagnostic()
        .expect("source errors carry a diagnostic")
        .code
}
