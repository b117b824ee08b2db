//! The fatal path aborts the process, so each case re-runs this test binary as
//! a child with `GUARDRAIL_FATAL_CASE` set and inspects how the child died.

use guardrail::{FactorialTable, OptionExt, ResultExt};
use std::process::{Command, Output};

const CASE_VAR: &str = "GUARDRAIL_FATAL_CASE";

fn run_case(name: &str) -> Output {
    Command::new(std::env::current_exe().expect("test binary path"))
        .args([name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CASE_VAR, name)
        .output()
        .expect("spawn child test")
}

fn is_child(name: &str) -> bool {
    std::env::var(CASE_VAR).map_or(false, |case| case == name)
}

fn assert_aborted(output: &Output, needle: &str) {
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[guardrail panic]"), "stderr: {}", stderr);
    assert!(stderr.contains(needle), "stderr: {}", stderr);
}

#[test]
fn unwrap_none_aborts() {
    if is_child("unwrap_none_aborts") {
        let none: Option<i64> = None;
        none.unwrap_or_abort();
        return;
    }
    let output = run_case("unwrap_none_aborts");
    assert_aborted(&output, "called unwrap() on None Option");
}

#[test]
fn expect_none_aborts_with_message() {
    if is_child("expect_none_aborts_with_message") {
        None::<i64>.expect_or_abort("config value missing");
        return;
    }
    let output = run_case("expect_none_aborts_with_message");
    assert_aborted(&output, "config value missing");
}

#[test]
fn unwrap_err_aborts() {
    if is_child("unwrap_err_aborts") {
        guardrail::math::try_div(1, 0).unwrap_or_abort();
        return;
    }
    let output = run_case("unwrap_err_aborts");
    assert_aborted(&output, "DivisionByZero");
}

#[test]
fn expect_err_aborts_with_message() {
    if is_child("expect_err_aborts_with_message") {
        guardrail::math::try_div(1, 0).expect_or_abort("bad ratio");
        return;
    }
    let output = run_case("expect_err_aborts_with_message");
    assert_aborted(&output, "bad ratio");
}

#[test]
fn error_on_ok_aborts() {
    if is_child("error_on_ok_aborts") {
        guardrail::math::try_div(4, 2).error();
        return;
    }
    let output = run_case("error_on_ok_aborts");
    assert_aborted(&output, "called error() on Ok Result");
}

#[test]
fn factorial_past_ceiling_aborts() {
    if is_child("factorial_past_ceiling_aborts") {
        let mut table = FactorialTable::<1_000_000_007>::with_ceiling(16);
        table.factorial(17);
        return;
    }
    let output = run_case("factorial_past_ceiling_aborts");
    assert_aborted(&output, "factorial cache limit exceeded");
}

#[test]
fn todo_aborts() {
    if is_child("todo_aborts") {
        guardrail::fatal::todo("sparse table");
    }
    let output = run_case("todo_aborts");
    assert_aborted(&output, "not yet implemented: sparse table");
}

#[test]
fn unreachable_aborts() {
    if is_child("unreachable_aborts") {
        guardrail::fatal::unreachable("negative length");
    }
    let output = run_case("unreachable_aborts");
    assert_aborted(&output, "entered unreachable code: negative length");
}

#[test]
fn present_values_do_not_abort() {
    assert_eq!(Some(3).unwrap_or_abort(), 3);
    assert_eq!(guardrail::math::try_div(9, 3).unwrap_or_abort(), 3);
    assert_eq!(guardrail::math::try_mod(9, 0).error().to_string(), "Modulo by zero");
}
