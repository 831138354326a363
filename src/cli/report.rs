//! count, find-duplicates and secrets-tree commands.
//!
//! Each prints an indented JSON report to stdout.

use crate::cli::connect::Connections;
use crate::cli::{output, ConnectionArgs, ScanArgs};
use crate::core::ops;
use crate::error::Result;

/// Count secrets and values under each path.
pub fn count(connection: &ConnectionArgs, args: &ScanArgs) -> Result<()> {
    let conn = Connections::load(connection)?;
    let excluded = conn.exclusions(&args.exclude)?;
    let store = conn.source()?;

    let report = ops::count(store.as_ref(), &args.paths, &excluded)?;
    output::data(&serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Show keys sharing a value under the given paths.
pub fn duplicates(connection: &ConnectionArgs, args: &ScanArgs) -> Result<()> {
    let conn = Connections::load(connection)?;
    let excluded = conn.exclusions(&args.exclude)?;
    let store = conn.source()?;

    let groups = ops::find_duplicates(store.as_ref(), &args.paths, &excluded)?;
    let result = serde_json::json!({
        "groups": groups,
        "count": groups.len()
    });
    output::data(&serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Show every secret path under each path.
pub fn tree(connection: &ConnectionArgs, args: &ScanArgs) -> Result<()> {
    let conn = Connections::load(connection)?;
    let excluded = conn.exclusions(&args.exclude)?;
    let store = conn.source()?;

    let tree = ops::secrets_tree(store.as_ref(), &args.paths, &excluded)?;
    output::data(&serde_json::to_string_pretty(&tree)?);
    Ok(())
}
