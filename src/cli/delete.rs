//! delete command.

use crate::cli::connect::Connections;
use crate::cli::{output, ConnectionArgs, DeleteArgs};
use crate::core::domain::DeleteOutcome;
use crate::core::ops;
use crate::error::Result;

/// Delete every secret at and under each path.
///
/// Empty paths are warnings; the command fails only if a path could not be
/// fully deleted.
pub fn execute(connection: &ConnectionArgs, args: &DeleteArgs) -> Result<()> {
    let conn = Connections::load(connection)?;
    let store = conn.source()?;

    let outcomes = ops::delete_subtrees(store.as_ref(), &args.paths);
    for outcome in &outcomes {
        for path in outcome.deleted() {
            output::success(&format!("deleted {}", output::path(path)));
        }
        match outcome {
            DeleteOutcome::Deleted { .. } => {}
            DeleteOutcome::Empty { root } => {
                output::warn(&format!("nothing to delete at {}", output::path(root)));
            }
            DeleteOutcome::Failed { root, error, .. } => {
                output::error(&format!("{}: {}", output::path(root), error));
            }
        }
    }
    if conn.is_dry_run() {
        output::dimmed("dry run: nothing was deleted");
    }

    ops::ensure_deleted(&outcomes)
}
