//! Evaluation phase tests.
//!
//! Whole scripts exercising the runtime: arrays and chains, functions,
//! faults and their recovery, and scoped resources.

use pretty_assertions::assert_eq;
use wry_diagnostic::ErrorCode;
use wryc::{run_source, RunConfig, RunError, EXIT_FAULT};

use crate::common::{code_of, failure_of, value_of};

#[test]
fn arithmetic_and_strings() {
    assert_eq!(value_of("(1 + 2) * 3 - 4 / 2"), "7");
    assert_eq!(value_of("7 % 3"), "1");
    assert_eq!(value_of("1 + 0.5"), "1.5");
    assert_eq!(value_of("\"ab\" + \"cd\""), "abcd");
    assert_eq!(value_of("not false and 2 > 1"), "true");
}

#[test]
fn array_keys_and_order() {
    assert_eq!(value_of("[10, 20, x: 1, 30]"), "[10, 20, x: 1, 30]");
    assert_eq!(value_of("a = [5: \"five\", \"six\"]\na.6"), "six");
    assert_eq!(value_of("a = [x: 1, y: 2]\na.y"), "2");
}

#[test]
fn loop_body_assignments_shadow_outer_names() {
    let source = "
total = 0
for v in [1, 2, 3, 4] {
    total = total + v
}
total
";
    assert_eq!(value_of(source), "0");
}

#[test]
fn for_loop_continue_skips_rest_of_iteration() {
    let source = "
try {
    for v in [1, 2, 3, 4] {
        if v == 2 { continue }
        if v >= 2 { raise v }
    }
} catch err { err }
";
    assert_eq!(value_of(source), "3");
}

#[test]
fn array_equality_mixes_ints_and_floats() {
    assert_eq!(value_of("1 == 1.0"), "true");
    assert_eq!(value_of("[1, [2]] == [1.0, [2.0]]"), "true");
    assert_eq!(value_of("[1] != [1.5]"), "true");
}

#[test]
fn closures_capture_their_chain() {
    let source = "
func make_adder(n) {
    func (x) { x + n }
}
add5 = make_adder(5)
add5(10)
";
    assert_eq!(value_of(source), "15");
}

#[test]
fn recursion() {
    let source = "
func fact(n) {
    if n <= 1 { return 1 }
    n * fact(n - 1)
}
fact(10)
";
    assert_eq!(value_of(source), "3628800");
}

#[test]
fn composition_and_inheritance() {
    assert_eq!(
        value_of("[x: 1, y: 2] & [y: 20, z: 3]"),
        "[x: 1, y: 20, z: 3]"
    );
    let source = "
base = [greeting: \"hello\"]
inherit child from base {
    name = \"wry\"
    text = greeting + \", \" + name
}
child.text
";
    assert_eq!(value_of(source), "hello, wry");
}

#[test]
fn try_catch_recovers() {
    assert_eq!(
        value_of("try { 1 / 0 } catch e { e.kind }"),
        "DivisionByZero"
    );
    assert_eq!(value_of("try { raise [code: 3] } catch e { e.code }"), "3");
}

#[test]
fn uncaught_faults() {
    assert_eq!(code_of("missing"), ErrorCode::E6001);
    assert_eq!(code_of("1 + \"a\""), ErrorCode::E6002);
    assert_eq!(code_of("func f(a) { a }\nf()"), ErrorCode::E6003);
    assert_eq!(code_of("1 % 0"), ErrorCode::E6004);
    assert_eq!(code_of("a = [1]\na.5"), ErrorCode::E6005);
    assert_eq!(code_of("raise 1"), ErrorCode::E6008);
    assert_eq!(failure_of("1 / 0").exit_code(), EXIT_FAULT);
}

#[test]
fn deep_recursion_is_a_fault() {
    let config = RunConfig {
        max_call_depth: 32,
        ..RunConfig::default()
    };
    let err = run_source("func f(n) { f(n + 1) }\nf(0)", &config).unwrap_err();
    let RunError::Eval(err) = err else {
        panic!("expected a runtime fault, got {err:?}");
    };
    assert_eq!(err.kind.name(), "RecursionLimit");
}

#[test]
fn with_releases_resources() {
    let source = "
res = [
    enter: func () { \"handle\" },
    release: func () { null },
]
with res as h {
    h + \"!\"
}
";
    assert_eq!(value_of(source), "handle!");
}
