//! Copy a subtree or a single secret between stores.

use tracing::{debug, info};

use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::Store;
use crate::core::tree;
use crate::error::{OperationError, Result};

/// Secrets written by [`copy_path`], as `(source, destination)` pairs.
#[derive(Debug, Default)]
pub struct CopyReport {
    copied: Vec<(SecretPath, SecretPath)>,
}

impl CopyReport {
    pub fn copied(&self) -> &[(SecretPath, SecretPath)] {
        &self.copied
    }

    pub fn len(&self) -> usize {
        self.copied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.copied.is_empty()
    }
}

/// Copy every secret under `from` on `source` to the same relative path
/// under `to` on `target`.
///
/// Not transactional: secrets written before a failure stay written.
///
/// # Errors
///
/// - `OperationError::NothingToCopy` if `from` holds no secrets.
/// - `OperationError::AmbiguousTarget` if `from` is itself a single secret.
/// - `OperationError::Interrupted` if a write fails, naming the destination
///   path that failed and carrying the pairs that had already landed.
pub fn copy_path(
    source: &dyn Store,
    target: &dyn Store,
    from: &SecretPath,
    to: &SecretPath,
) -> Result<CopyReport> {
    info!(
        from = %from,
        source = source.address(),
        to = %to,
        target = target.address(),
        "copying path"
    );

    let snapshot = tree::read_tree(source, from, &ExclusionSet::none())?;
    if snapshot.is_empty() {
        return Err(OperationError::NothingToCopy(from.to_string()).into());
    }
    if snapshot.is_only(from) {
        return Err(OperationError::AmbiguousTarget(from.to_string()).into());
    }

    let mut report = CopyReport::default();
    for (leaf, document) in snapshot.iter() {
        let destination = leaf.rebase(from, to)?;
        debug!(from = %leaf, to = %destination, keys = document.len(), "writing");

        if let Err(e) = target.write(&destination, document) {
            return Err(OperationError::Interrupted {
                path: destination.to_string(),
                copied: report.copied,
                source: Box::new(e),
            }
            .into());
        }

        info!(from = %leaf, to = %destination, "copied");
        report.copied.push((leaf.clone(), destination));
    }

    Ok(report)
}

/// Copy the single secret at `from` on `source` to `to` on `target`.
///
/// # Errors
///
/// Returns `OperationError::NotASecret` if nothing (or an empty document)
/// is stored at `from`.
pub fn copy_secret(
    source: &dyn Store,
    target: &dyn Store,
    from: &SecretPath,
    to: &SecretPath,
) -> Result<()> {
    info!(
        from = %from,
        source = source.address(),
        to = %to,
        target = target.address(),
        "copying secret"
    );

    let document = match source.read(from) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            return Err(OperationError::NotASecret(from.to_string()).into())
        }
        Err(e) => return Err(e),
    };
    if document.is_empty() {
        return Err(OperationError::NotASecret(from.to_string()).into());
    }

    target.write(to, &document)?;
    info!(from = %from, to = %to, "copied");
    Ok(())
}
