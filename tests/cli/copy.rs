//! Tests for copy commands against a mock Vault server.

use predicates::prelude::*;
use serde_json::json;

use crate::support::*;

fn copy_cmd(t: &Test, server: &MockVault) -> assert_cmd::Command {
    let mut cmd = t.cmd();
    cmd.env("VAULT_ADDR", server.uri())
        .env("VAULT_TOKEN", MOCK_TOKEN)
        .env("VAULT_TARGET_ADDR", server.uri())
        .env("VAULT_TARGET_TOKEN", MOCK_TOKEN);
    cmd
}

#[test]
fn test_copy_path_lists_each_secret() {
    let t = Test::new();
    let server = MockVault::start();
    server.list("/v1/secret/app", 200, &["a", "b"]);
    server.read("/v1/secret/app/a", 200, json!({"k": "1"}));
    server.read("/v1/secret/app/b", 200, json!({"k": "2"}));
    server.expect("POST", "/v1/backup/a", 204, 1);
    server.expect("POST", "/v1/backup/b", 204, 1);

    copy_cmd(&t, &server)
        .args(["copy-path", "secret/app", "backup"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("secret/app/a → backup/a")
                .and(predicate::str::contains("secret/app/b → backup/b"))
                .and(predicate::str::contains("copied 2 secrets")),
        );
    server.verify();
}

#[test]
fn test_interrupted_copy_path_reports_what_landed() {
    let t = Test::new();
    let server = MockVault::start();
    server.list("/v1/secret/app", 200, &["a", "b"]);
    server.read("/v1/secret/app/a", 200, json!({"k": "1"}));
    server.read("/v1/secret/app/b", 200, json!({"k": "2"}));
    server.expect("POST", "/v1/backup/a", 204, 1);
    server.fail("POST", "/v1/backup/b", 403, "permission denied");

    copy_cmd(&t, &server)
        .args(["copy-path", "secret/app", "backup"])
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("secret/app/a → backup/a")
                .and(predicate::str::contains("backup/b").not()),
        )
        .stderr(
            predicate::str::contains("copy interrupted at 'backup/b' after 1 secrets")
                .and(predicate::str::contains("not rolled back")),
        );
    server.verify();
}

#[test]
fn test_copy_secret_on_directory_suggests_copy_path() {
    let t = Test::new();
    let server = MockVault::start();
    server.fail("GET", "/v1/secret/app", 404, "");

    copy_cmd(&t, &server)
        .args(["copy-secret", "secret/app", "backup/app"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("is not a valid secret")
                .and(predicate::str::contains("vaultkv copy-path")),
        );
}
