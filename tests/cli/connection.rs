//! Tests for connection handling before and at the first request.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_missing_connection_arguments() {
    let t = Test::new();

    let output = t.run(&["count", "secret/app"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required arguments: vault-addr, vault-token");
    assert_stderr_contains(&output, "VAULT_ADDR");
}

#[test]
fn test_copy_requires_target_connection() {
    let t = Test::new();

    let output = t.run_unreachable(&["copy-path", "secret/app", "backup/app"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "vault-target-addr, vault-target-token");
    assert!(!stderr(&output).contains("cannot reach"));
}

#[test]
fn test_copy_secret_requires_target_connection() {
    let t = Test::new();

    let output = t.run_unreachable(&["copy-secret", "secret/app/db", "backup/db"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "vault-target-token");
}

#[test]
fn test_unreachable_vault_fails() {
    let t = Test::new();

    t.cmd()
        .env("VAULT_ADDR", UNREACHABLE_ADDR)
        .env("VAULT_TOKEN", "test-token")
        .args(["secrets-tree", "secret"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("cannot reach").and(predicate::str::contains("127.0.0.1:1")),
        );
}

#[test]
fn test_invalid_address_fails() {
    let t = Test::new();

    let output = t.run(&[
        "--vault-addr",
        "vault.internal:8200",
        "--vault-token",
        "x",
        "count",
        "secret",
    ]);
    assert_failure(&output);
    assert_stderr_contains(&output, "must start with http");
}

#[test]
fn test_token_flag_overrides_missing_env() {
    let t = Test::new();

    let output = t.run(&[
        "find-duplicates",
        "secret",
        "--vault-addr",
        UNREACHABLE_ADDR,
        "--vault-token",
        "flag-token",
    ]);
    assert_failure(&output);
    assert!(!stderr(&output).contains("missing required arguments"));
    assert!(!stderr(&output).contains("flag-token"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();

    let output = t.run_unreachable(&["--verbose", "count", "secret"]);
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "authenticating");
}

#[test]
fn test_log_json_format() {
    let t = Test::new();

    let output = t.run_unreachable(&["--verbose", "--log-json", "count", "secret"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "\"message\":\"authenticating\"");
}
