use pretty_assertions::assert_eq;

use super::*;

fn run(source: &str) -> Result<Option<String>, RunError> {
    run_source(source, &RunConfig::default())
}

fn rendered(err: &RunError, source: &str) -> String {
    let file = SourceFile {
        name: "test.wry".to_string(),
        text: source.to_string(),
    };
    let bytes = render_error(Vec::new(), err, Some(&file), ColorMode::Never, false);
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_value_is_rendered() {
    assert_eq!(run("1 + 2").unwrap(), Some("3".to_string()));
    assert_eq!(run("[1, b: \"x\"]").unwrap(), Some("[1, b: \"x\"]".to_string()));
    assert_eq!(run("\"plain\"").unwrap(), Some("plain".to_string()));
}

#[test]
fn test_null_is_not_rendered() {
    assert_eq!(run("null").unwrap(), None);
    assert_eq!(run("").unwrap(), None);
}

#[test]
fn test_exit_codes() {
    assert_eq!(run("\"open").unwrap_err().exit_code(), EXIT_SYNTAX);
    assert_eq!(run("1 +").unwrap_err().exit_code(), EXIT_SYNTAX);
    assert_eq!(run("1 / 0").unwrap_err().exit_code(), EXIT_FAULT);

    let missing = read_source(Some(Path::new("/definitely/not/here.wry"))).unwrap_err();
    assert_eq!(missing.exit_code(), EXIT_IO);
    assert!(missing.to_diagnostic().is_none());
}

#[test]
fn test_max_call_depth_is_applied() {
    let config = RunConfig {
        max_call_depth: 4,
        ..RunConfig::default()
    };
    let err = run_source("func f(n) { f(n + 1) }\nf(0)", &config).unwrap_err();
    let RunError::Eval(err) = err else {
        panic!("expected a runtime fault, got {err:?}");
    };
    assert_eq!(err.kind.name(), "RecursionLimit");
}

#[test]
fn test_runtime_fault_rendering() {
    let source = "x = 1\ny = x / 0";
    let err = run(source).unwrap_err();
    let text = rendered(&err, source);

    assert!(text.starts_with("error[E6004]: division by zero\n"), "{text}");
    assert!(text.contains("--> test.wry:2:5"), "{text}");
    assert!(text.contains("help: check the divisor before dividing"), "{text}");
}

#[test]
fn test_parse_error_rendering() {
    let source = "a < b < c";
    let err = run(source).unwrap_err();
    let text = rendered(&err, source);
    assert!(text.starts_with("error[E1008]"), "{text}");
}

#[test]
fn test_io_error_rendering() {
    let err = read_source(Some(Path::new("/definitely/not/here.wry"))).unwrap_err();
    let bytes = render_error(Vec::new(), &err, None, ColorMode::Never, false);
    let text = String::from_utf8(bytes).unwrap();
    assert!(
        text.starts_with("error: cannot read `/definitely/not/here.wry`"),
        "{text}"
    );
}
