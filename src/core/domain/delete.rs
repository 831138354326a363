//! Per-root outcome of a subtree delete.

use crate::core::path::SecretPath;
use crate::error::Error;

/// What happened to one requested root.
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Every leaf under the root was deleted.
    Deleted {
        root: SecretPath,
        paths: Vec<SecretPath>,
    },
    /// Nothing was found under the root.
    Empty { root: SecretPath },
    /// Deletion stopped part way; `deleted` leaves are already gone.
    Failed {
        root: SecretPath,
        deleted: Vec<SecretPath>,
        error: Error,
    },
}

impl DeleteOutcome {
    /// The root this outcome belongs to.
    pub fn root(&self) -> &SecretPath {
        match self {
            DeleteOutcome::Deleted { root, .. }
            | DeleteOutcome::Empty { root }
            | DeleteOutcome::Failed { root, .. } => root,
        }
    }

    /// Leaves removed from the store under this root.
    pub fn deleted(&self) -> &[SecretPath] {
        match self {
            DeleteOutcome::Deleted { paths, .. } => paths,
            DeleteOutcome::Failed { deleted, .. } => deleted,
            DeleteOutcome::Empty { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DeleteOutcome::Failed { .. })
    }
}
