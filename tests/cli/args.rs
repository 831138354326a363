//! Tests for argument parsing, help and completions.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help_lists_operations() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    for command in [
        "copy-path",
        "copy-secret",
        "delete",
        "count",
        "find-duplicates",
        "secrets-tree",
    ] {
        assert_stdout_contains(&output, command);
    }
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "vaultkv");
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
}

#[test]
fn test_copy_path_needs_two_paths() {
    let t = Test::new();

    let output = t.run(&["copy-path", "secret/app"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "TO");
}

#[test]
fn test_count_needs_a_path() {
    let t = Test::new();

    let output = t.run(&["count"]);
    assert_failure(&output);
}

#[test]
fn test_malformed_path_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["delete", "secret//app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty segment"));
}

#[test]
fn test_token_not_shown_in_help() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("VAULT_TOKEN", "hvs.do-not-print")
        .arg("--help")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!stdout(&output).contains("hvs.do-not-print"));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_vaultkv") || out.contains("complete"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tcsh"));
}
