//! End-to-end tests: run the `rsexit` binary and assert on its exit status.

use std::process::{Command, Output};

use rstest::rstest;
use tracing::debug;

use rsexit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn rsexit(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_rsexit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run rsexit");
    debug!(?args, status = ?output.status);
    output
}

#[test]
fn given_usage_error_with_message_when_exit_then_status_64() {
    let out = rsexit(&["exit", "usage", "--message", "missing argument"]);
    assert_eq!(out.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing argument"));
}

#[test]
fn given_config_error_over_nothing_when_exit_then_status_0() {
    let out = rsexit(&["exit", "config"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn given_os_error_with_message_when_exit_then_status_71() {
    let out = rsexit(&["exit", "os", "-m", "permission denied"]);
    assert_eq!(out.status.code(), Some(71));
}

#[test]
fn given_explicit_code_when_exit_then_status_matches() {
    let out = rsexit(&["exit", "--code", "75", "-m", "try again"]);
    assert_eq!(out.status.code(), Some(75));
}

#[rstest]
#[case("256")]
#[case("512")]
#[case("-1")]
fn given_code_outside_u8_when_exit_then_software_status(#[case] code: &str) {
    let out = rsexit(&["exit", "--code", code, "-m", "boom"]);
    assert_eq!(out.status.code(), Some(70));
}

#[rstest]
#[case("0", "EX_OK")]
#[case("64", "EX_USAGE")]
#[case("ex_config", "EX_CONFIG")]
#[case("oserr", "EX_OSERR")]
fn given_known_code_when_explain_then_prints_name(#[case] query: &str, #[case] name: &str) {
    let out = rsexit(&["explain", query]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(name));
}

#[test]
fn given_unknown_code_when_explain_then_usage_status() {
    let out = rsexit(&["explain", "99"]);
    assert_eq!(out.status.code(), Some(64));
}

#[test]
fn given_bad_arguments_when_parsed_then_usage_status() {
    let out = rsexit(&["exit", "usage", "--code", "3"]);
    assert_eq!(out.status.code(), Some(64));
}

#[test]
fn given_list_when_run_then_all_fifteen_codes_printed() {
    let out = rsexit(&["list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for entry in rsexit::exitcode::ALL.iter() {
        assert!(stdout.contains(entry.name), "missing {}", entry.name);
    }
}

#[test]
fn given_help_when_run_then_success() {
    assert!(rsexit(&["--help"]).status.success());
}
