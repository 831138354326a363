//! Tests for the config file.

use crate::support::*;

#[test]
fn test_address_from_config_file() {
    let t = Test::new();
    let path = t.write_config("[source]\naddress = \"http://127.0.0.1:1\"\n");

    let output = t
        .cmd()
        .env("VAULT_TOKEN", "test-token")
        .args(["--config", path.to_str().unwrap(), "count", "secret"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(!stderr(&output).contains("missing required arguments"));
    assert_stderr_contains(&output, "cannot reach");
}

#[test]
fn test_config_env_var() {
    let t = Test::new();
    let path = t.write_config("[source]\naddress = \"http://127.0.0.1:1\"\n");

    let output = t
        .cmd()
        .env("VAULTKV_CONFIG", &path)
        .env("VAULT_TOKEN", "test-token")
        .args(["count", "secret"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot reach");
}

#[test]
fn test_token_in_config_file_rejected() {
    let t = Test::new();
    let path = t.write_config("[source]\ntoken = \"hvs.secret\"\n");

    let output = t.run(&["--config", path.to_str().unwrap(), "count", "secret"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_missing_config_file() {
    let t = Test::new();
    let path = t.home.path().join("nope.toml");

    let output = t.run(&["--config", path.to_str().unwrap(), "count", "secret"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config file");
}

#[test]
fn test_bad_exclusion_in_config_file() {
    let t = Test::new();
    let path = t.write_config("exclude = [\"a//b\"]\n");

    let output = t
        .cmd()
        .env("VAULT_ADDR", UNREACHABLE_ADDR)
        .env("VAULT_TOKEN", "test-token")
        .args(["--config", path.to_str().unwrap(), "count", "secret"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "empty segment");
}
