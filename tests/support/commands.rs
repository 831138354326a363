//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;
use vaultkv::core::constants;

/// An address nothing listens on.
pub const UNREACHABLE_ADDR: &str = "http://127.0.0.1:1";

impl Test {
    /// Create a vaultkv command with a clean environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vaultkv").expect("failed to find vaultkv binary");
        for var in [
            constants::ENV_VAULT_ADDR,
            constants::ENV_VAULT_TOKEN,
            constants::ENV_VAULT_TARGET_ADDR,
            constants::ENV_VAULT_TARGET_TOKEN,
            constants::ENV_CONFIG,
            constants::ENV_LOG,
            "XDG_CONFIG_HOME",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run with arguments and capture output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run vaultkv")
    }

    /// Run against an unreachable source instance.
    pub fn run_unreachable(&self, args: &[&str]) -> Output {
        self.cmd()
            .env(constants::ENV_VAULT_ADDR, UNREACHABLE_ADDR)
            .env(constants::ENV_VAULT_TOKEN, "test-token")
            .args(args)
            .output()
            .expect("failed to run vaultkv")
    }
}
