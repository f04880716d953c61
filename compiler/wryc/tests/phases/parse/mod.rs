//! Lexer and parser phase tests.
//!
//! Every script here is rejected before evaluation starts, so nothing in it
//! may run.

use wry_diagnostic::ErrorCode;
use wryc::EXIT_SYNTAX;

use crate::common::{code_of, failure_of};

#[test]
fn unterminated_string() {
    assert_eq!(code_of("x = \"open"), ErrorCode::E0001);
}

#[test]
fn invalid_character() {
    assert_eq!(code_of("x = 1 $ 2"), ErrorCode::E0002);
}

#[test]
fn integer_literal_out_of_range() {
    assert_eq!(code_of("99999999999999999999"), ErrorCode::E0003);
}

#[test]
fn invalid_escape() {
    assert_eq!(code_of(r#""bad \q""#), ErrorCode::E0004);
}

#[test]
fn missing_expression() {
    assert_eq!(code_of("x = "), ErrorCode::E1002);
}

#[test]
fn unclosed_delimiter() {
    assert_eq!(code_of("x = [1, 2"), ErrorCode::E1003);
}

#[test]
fn break_outside_loop() {
    assert_eq!(code_of("break"), ErrorCode::E1007);
    assert_eq!(code_of("func f() { continue }"), ErrorCode::E1007);
}

#[test]
fn chained_comparison() {
    assert_eq!(code_of("1 < 2 < 3"), ErrorCode::E1008);
}

#[test]
fn catch_kind_without_binding() {
    assert_eq!(
        code_of("try { 1 / 0 } catch UnboundName { \"caught\" }"),
        ErrorCode::E1009
    );
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    // The division would fault at runtime; the parse error wins.
    let err = failure_of("x = 1 / 0\ny = [");
    assert_eq!(err.exit_code(), EXIT_SYNTAX);
}
