use pretty_assertions::assert_eq;
use wry_diagnostic::ErrorCode;
use wry_ir::Span;

use super::*;

#[test]
fn test_kind_names_match_catch_spelling() {
    assert_eq!(unbound_name("x").kind.name(), "UnboundName");
    assert_eq!(type_mismatch("bad").kind.name(), "TypeMismatch");
    assert_eq!(missing_argument("f", "a").kind.name(), "ArityMismatch");
    assert_eq!(division_by_zero().kind.name(), "DivisionByZero");
    assert_eq!(modulo_by_zero().kind.name(), "DivisionByZero");
    assert_eq!(key_not_found("k").kind.name(), "KeyNotFound");
    assert_eq!(integer_overflow("addition").kind.name(), "IntegerOverflow");
    assert_eq!(recursion_limit_exceeded(8).kind.name(), "RecursionLimit");
    assert_eq!(
        raised(Value::Int(1), "1".to_string()).kind.name(),
        "Raised"
    );
    assert_eq!(EvalError::new("host").kind.name(), "Custom");
}

#[test]
fn test_kind_names_agree_with_error_codes() {
    let errors = [
        unbound_name("x"),
        type_mismatch("bad"),
        missing_argument("f", "a"),
        division_by_zero(),
        key_not_found("k"),
        integer_overflow("addition"),
        recursion_limit_exceeded(8),
        raised(Value::Null, String::new()),
        EvalError::new("host"),
    ];
    for err in errors {
        assert_eq!(
            error_code_for_kind(&err.kind).fault_kind(),
            Some(err.kind.name())
        );
    }
}

#[test]
fn test_messages() {
    assert_eq!(unbound_name("x").message, "unbound name `x`");
    assert_eq!(division_by_zero().message, "division by zero");
    assert_eq!(modulo_by_zero().message, "modulo by zero");
    assert_eq!(
        too_many_arguments("f", 1, 3).message,
        "`f`: expected at most 1 positional argument, got 3"
    );
    assert_eq!(
        missing_argument("", "a").message,
        "anonymous function: missing argument `a`"
    );
    assert_eq!(
        binary_type_mismatch("+", "int", "str").message,
        "type mismatch: operator `+` cannot be applied to int and str"
    );
    assert_eq!(raised(Value::Null, "boom".to_string()).message, "boom");
    assert_eq!(
        division_by_zero().to_string(),
        "DivisionByZero: division by zero"
    );
}

#[test]
fn test_subject() {
    assert_eq!(unbound_name("x").kind.subject(), Some("x"));
    assert_eq!(key_not_found("k").kind.subject(), Some("k"));
    assert_eq!(unknown_argument("f", "z").kind.subject(), Some("f"));
    assert_eq!(unknown_argument("", "z").kind.subject(), None);
    assert_eq!(division_by_zero().kind.subject(), None);
}

#[test]
fn test_control_flow_signals() {
    let ret = EvalError::return_with(Value::Int(3));
    assert!(ret.is_control_flow());
    assert_eq!(ret.control_flow, Some(ControlFlow::Return(Value::Int(3))));
    assert!(EvalError::break_signal().is_control_flow());
    assert!(EvalError::continue_signal().is_control_flow());
    assert!(!division_by_zero().is_control_flow());
}

#[test]
fn test_or_span_keeps_precise_span() {
    let inner = Span::new(4, 5);
    let outer = Span::new(0, 10);

    let err = division_by_zero().with_span(inner).or_span(outer);
    assert_eq!(err.span, Some(inner));

    let err = division_by_zero().or_span(outer);
    assert_eq!(err.span, Some(outer));
}

#[test]
fn test_error_codes() {
    assert_eq!(
        error_code_for_kind(&unbound_name("x").kind),
        ErrorCode::E6001
    );
    assert_eq!(
        error_code_for_kind(&type_mismatch("t").kind),
        ErrorCode::E6002
    );
    assert_eq!(
        error_code_for_kind(&missing_argument("f", "a").kind),
        ErrorCode::E6003
    );
    assert_eq!(error_code_for_kind(&division_by_zero().kind), ErrorCode::E6004);
    assert_eq!(error_code_for_kind(&key_not_found("k").kind), ErrorCode::E6005);
    assert_eq!(
        error_code_for_kind(&integer_overflow("negation").kind),
        ErrorCode::E6006
    );
    assert_eq!(
        error_code_for_kind(&recursion_limit_exceeded(1).kind),
        ErrorCode::E6007
    );
    assert_eq!(
        error_code_for_kind(&raised(Value::Null, String::new()).kind),
        ErrorCode::E6008
    );
    assert_eq!(
        error_code_for_kind(&EvalError::new("host").kind),
        ErrorCode::E6099
    );
}

#[test]
fn test_to_diagnostic() {
    let span = Span::new(2, 7);
    let backtrace = EvalBacktrace::new(vec![BacktraceFrame {
        name: "inner".to_string(),
        span: Some(Span::new(20, 27)),
    }]);
    let err = division_by_zero()
        .with_span(span)
        .with_backtrace(backtrace)
        .with_note("while computing a ratio");

    let diag = to_diagnostic(&err);
    assert_eq!(diag.code, ErrorCode::E6004);
    assert_eq!(diag.message, "division by zero");
    assert_eq!(diag.primary_span(), Some(span));
    assert_eq!(
        diag.notes,
        vec![
            "while computing a ratio".to_string(),
            "call stack:\n  0: inner at 20..27".to_string(),
        ]
    );
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_backtrace_display_is_capped() {
    let frames = (0..25)
        .map(|i| BacktraceFrame {
            name: format!("f{i}"),
            span: None,
        })
        .collect();
    let rendered = EvalBacktrace::new(frames).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "  0: f0");
    assert_eq!(lines[19], "  19: f19");
    assert_eq!(lines[20], "  ... and 5 more");
}
