//! Command-line options, parsed by hand into a [`RunConfig`].

use std::path::PathBuf;

use thiserror::Error;
use wry_diagnostic::emitter::ColorMode;
use wry_eval::DEFAULT_MAX_CALL_DEPTH;

/// Settings for one script run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Script to run; `None` reads stdin.
    pub path: Option<PathBuf>,
    pub max_call_depth: usize,
    pub color: ColorMode,
    /// Do not print the script's value.
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            path: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            color: ColorMode::Auto,
            quiet: false,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
    Version,
}

/// Malformed command line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unexpected argument `{0}`: only one script can be run")]
    ExtraArgument(String),
}

/// Parse arguments (without the program name).
///
/// `-h` and `-V` stop parsing. A lone `-` means stdin.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RunConfig::default();
    let mut seen_path = false;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-q" | "--quiet" => config.quiet = true,
            "-" if !seen_path => seen_path = true,
            _ if arg.starts_with("--max-depth=") => {
                let value = &arg["--max-depth=".len()..];
                config.max_call_depth = match value.parse::<usize>() {
                    Ok(depth) if depth > 0 => depth,
                    _ => {
                        return Err(UsageError::InvalidValue {
                            flag: "--max-depth",
                            value: value.to_string(),
                        })
                    }
                };
            }
            _ if arg.starts_with("--color=") => {
                let value = &arg["--color=".len()..];
                config.color = ColorMode::parse(value).ok_or_else(|| UsageError::InvalidValue {
                    flag: "--color",
                    value: value.to_string(),
                })?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(UsageError::UnknownOption(arg));
            }
            _ if seen_path => return Err(UsageError::ExtraArgument(arg)),
            _ => {
                config.path = Some(PathBuf::from(arg));
                seen_path = true;
            }
        }
    }

    Ok(Command::Run(config))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
