//! copy-path and copy-secret commands.

use crate::cli::connect::Connections;
use crate::cli::{output, ConnectionArgs, CopyArgs};
use crate::core::ops;
use crate::core::path::SecretPath;
use crate::error::{Error, OperationError, Result};

/// Copy a subtree from the source instance to the target instance.
pub fn path(connection: &ConnectionArgs, args: &CopyArgs) -> Result<()> {
    let conn = Connections::load(connection)?;
    let (source, target) = conn.source_and_target()?;

    let result = ops::copy_path(source.as_ref(), target.as_ref(), &args.from, &args.to);
    if let Err(Error::Operation(OperationError::Interrupted { copied, .. })) = &result {
        print_copied(copied);
    }
    let report = result?;
    print_copied(report.copied());
    output::success(&format!(
        "copied {} secrets from {} to {} on {}",
        report.len(),
        output::path(&args.from),
        output::path(&args.to),
        target.address()
    ));
    if conn.is_dry_run() {
        output::dimmed("dry run: nothing was written");
    }
    Ok(())
}

/// Copy one secret from the source instance to the target instance.
pub fn secret(connection: &ConnectionArgs, args: &CopyArgs) -> Result<()> {
    let conn = Connections::load(connection)?;
    let (source, target) = conn.source_and_target()?;

    ops::copy_secret(source.as_ref(), target.as_ref(), &args.from, &args.to)?;
    output::success(&format!(
        "{} → {} on {}",
        output::path(&args.from),
        output::path(&args.to),
        target.address()
    ));
    if conn.is_dry_run() {
        output::dimmed("dry run: nothing was written");
    }
    Ok(())
}

fn print_copied(copied: &[(SecretPath, SecretPath)]) {
    for (from, to) in copied {
        output::success(&format!("{} → {}", output::path(from), output::path(to)));
    }
}
