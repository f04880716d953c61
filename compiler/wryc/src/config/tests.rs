use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<Command, UsageError> {
    parse_args(args.iter().map(|s| (*s).to_string()))
}

fn run_config(args: &[&str]) -> RunConfig {
    match parse(args).unwrap() {
        Command::Run(config) => config,
        other => panic!("expected a run command, got {other:?}"),
    }
}

#[test]
fn test_defaults_read_stdin() {
    assert_eq!(run_config(&[]), RunConfig::default());
    assert_eq!(run_config(&["-"]), RunConfig::default());
}

#[test]
fn test_path_and_flags() {
    let config = run_config(&["--max-depth=64", "-q", "--color=never", "script.wry"]);
    assert_eq!(
        config,
        RunConfig {
            path: Some(PathBuf::from("script.wry")),
            max_call_depth: 64,
            color: ColorMode::Never,
            quiet: true,
        }
    );
}

#[test]
fn test_help_and_version() {
    assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
    assert_eq!(parse(&["script.wry", "--help"]).unwrap(), Command::Help);
    assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
}

#[test]
fn test_invalid_values() {
    assert_eq!(
        parse(&["--max-depth=lots"]).unwrap_err(),
        UsageError::InvalidValue {
            flag: "--max-depth",
            value: "lots".to_string(),
        }
    );
    assert!(parse(&["--max-depth=0"]).is_err());
    assert_eq!(
        parse(&["--color=rainbow"]).unwrap_err().to_string(),
        "invalid value `rainbow` for `--color`"
    );
}

#[test]
fn test_unknown_option_and_extra_argument() {
    assert_eq!(
        parse(&["--fast"]).unwrap_err(),
        UsageError::UnknownOption("--fast".to_string())
    );
    assert_eq!(
        parse(&["a.wry", "b.wry"]).unwrap_err(),
        UsageError::ExtraArgument("b.wry".to_string())
    );
    assert_eq!(
        parse(&["-", "b.wry"]).unwrap_err(),
        UsageError::ExtraArgument("b.wry".to_string())
    );
}
