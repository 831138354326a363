//! Command-line interface.

pub mod completions;
pub mod connect;
pub mod copy;
pub mod delete;
pub mod output;
pub mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::path::SecretPath;

/// vaultkv - bulk operations on Vault KV secret trees.
#[derive(Parser, Debug)]
#[command(
    name = "vaultkv",
    about = "Walk, copy, delete, count and deduplicate Vault KV secret trees",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection flags shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Address of the source Vault instance
    #[arg(long, env = "VAULT_ADDR", global = true)]
    pub vault_addr: Option<String>,

    /// Token for the source Vault instance
    #[arg(long, env = "VAULT_TOKEN", hide_env_values = true, global = true)]
    pub vault_token: Option<String>,

    /// Address of the target Vault instance (copies only)
    #[arg(long, env = "VAULT_TARGET_ADDR", global = true)]
    pub vault_target_addr: Option<String>,

    /// Token for the target Vault instance (copies only)
    #[arg(long, env = "VAULT_TARGET_TOKEN", hide_env_values = true, global = true)]
    pub vault_target_token: Option<String>,

    /// Do not verify TLS certificates
    #[arg(long, global = true)]
    pub skip_tls: bool,

    /// Read from Vault but never write or delete
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Config file (defaults to <config dir>/vaultkv/config.toml)
    #[arg(long, env = "VAULTKV_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy every secret under FROM on the source instance to TO on the target instance
    CopyPath(CopyArgs),

    /// Copy one secret from the source instance to the target instance
    CopySecret(CopyArgs),

    /// Delete all secrets at and under each path on the source instance
    Delete(DeleteArgs),

    /// Count secrets and values under each path
    Count(ScanArgs),

    /// Show keys that share the same value under the given paths
    FindDuplicates(ScanArgs),

    /// Show every secret path under each path
    SecretsTree(ScanArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for copy-path and copy-secret.
#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// Path to copy from (source instance)
    pub from: SecretPath,
    /// Path to copy to (target instance)
    pub to: SecretPath,
}

/// Arguments for delete.
#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Paths to delete, recursively
    #[arg(required = true)]
    pub paths: Vec<SecretPath>,
}

/// Arguments for count, find-duplicates and secrets-tree.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Paths to walk
    #[arg(required = true)]
    pub paths: Vec<SecretPath>,

    /// Paths to leave out, with everything under them
    #[arg(short, long, num_args = 1..)]
    pub exclude: Vec<SecretPath>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    let Cli {
        connection,
        command,
        ..
    } = cli;

    match command {
        Command::CopyPath(args) => copy::path(&connection, &args),
        Command::CopySecret(args) => copy::secret(&connection, &args),
        Command::Delete(args) => delete::execute(&connection, &args),
        Command::Count(args) => report::count(&connection, &args),
        Command::FindDuplicates(args) => report::duplicates(&connection, &args),
        Command::SecretsTree(args) => report::tree(&connection, &args),
        Command::Completions { shell } => completions::execute(shell),
    }
}
