//! Wry command-line driver.
//!
//! - `config`: command-line options
//! - `run`: the read, lex, parse, evaluate, report pipeline
//! - `tracing_setup`: `RUST_LOG`-driven tracing subscriber

pub mod config;
pub mod run;
mod tracing_setup;

pub use config::{parse_args, Command, RunConfig, UsageError};
pub use run::{
    read_source, render_error, run_source, RunError, SourceFile, EXIT_FAULT, EXIT_IO, EXIT_SYNTAX,
};
pub use tracing_setup::init_tracing;
