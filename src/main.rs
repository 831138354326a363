//! vaultkv - bulk operations on Vault KV secret trees.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultkv::cli::output;
use vaultkv::cli::{execute, Cli};
use vaultkv::core::constants;
use vaultkv::error::{ConfigError, Error, OperationError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON reports on stdout stay parseable
    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultkv=debug")
        } else {
            EnvFilter::new("vaultkv=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::Missing(_)) => {
                Some("set VAULT_ADDR and VAULT_TOKEN (and VAULT_TARGET_* for copies)")
            }
            Error::Operation(OperationError::AmbiguousTarget(_)) => {
                Some("use: vaultkv copy-secret")
            }
            Error::Operation(OperationError::NotASecret(_)) => Some("use: vaultkv copy-path"),
            Error::Operation(OperationError::Interrupted { .. }) => {
                Some("secrets copied before the failure were not rolled back")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
