//! Delete whole subtrees.

use tracing::{debug, error, info, warn};

use crate::core::domain::DeleteOutcome;
use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::Store;
use crate::core::tree;
use crate::error::{OperationError, Result};

/// Delete every secret at and under each root.
///
/// Roots are independent: an empty root is reported and skipped, and a
/// failure under one root does not stop the next one. Leaves deleted
/// before a failure stay deleted.
pub fn delete_subtrees(store: &dyn Store, roots: &[SecretPath]) -> Vec<DeleteOutcome> {
    roots
        .iter()
        .map(|root| delete_subtree(store, root))
        .collect()
}

fn delete_subtree(store: &dyn Store, root: &SecretPath) -> DeleteOutcome {
    info!(root = %root, address = store.address(), "deleting all secrets at and under root");

    let leaves = match tree::list_leaves(store, root, &ExclusionSet::none()) {
        Ok(leaves) => leaves,
        Err(error) => {
            error!(root = %root, %error, "failed to list secrets");
            return DeleteOutcome::Failed {
                root: root.clone(),
                deleted: Vec::new(),
                error,
            };
        }
    };

    if leaves.is_empty() {
        warn!(root = %root, "nothing to delete");
        return DeleteOutcome::Empty { root: root.clone() };
    }

    let mut deleted = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        if let Err(error) = store.delete(&leaf) {
            error!(path = %leaf, %error, "failed to delete secret");
            return DeleteOutcome::Failed {
                root: root.clone(),
                deleted,
                error,
            };
        }
        info!(path = %leaf, "deleted");
        deleted.push(leaf);
    }

    debug!(root = %root, count = deleted.len(), "subtree deleted");
    DeleteOutcome::Deleted {
        root: root.clone(),
        paths: deleted,
    }
}

/// Turn failed roots into an error. Empty roots are not failures.
///
/// # Errors
///
/// Returns `OperationError::DeleteFailed` if any root failed.
pub fn ensure_deleted(outcomes: &[DeleteOutcome]) -> Result<()> {
    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    if failed > 0 {
        return Err(OperationError::DeleteFailed {
            failed,
            total: outcomes.len(),
        }
        .into());
    }
    Ok(())
}
