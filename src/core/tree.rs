//! Secret tree traversal.
//!
//! Turns the store's one-level listings into flat sets of leaf paths, and
//! reads those leaves into a [`Snapshot`].

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace, warn};

use crate::core::domain::Snapshot;
use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::Store;
use crate::error::Result;

/// Every leaf secret path at or under `root`, minus exclusions.
///
/// A root that is itself a secret yields just `{root}`; a root that does
/// not exist yields the empty set. Excluded subtrees are never listed.
///
/// When a listing holds both `name` and `name/`, the directory wins and the
/// document stored at `name` is skipped, so no returned path is ever a
/// prefix of another.
///
/// # Errors
///
/// Returns `StoreError` if a listing or the root read fails for a reason
/// other than the path not existing.
pub fn list_leaves(
    store: &dyn Store,
    root: &SecretPath,
    excluded: &ExclusionSet,
) -> Result<BTreeSet<SecretPath>> {
    let mut leaves = BTreeSet::new();

    if excluded.covers(root) {
        debug!(root = %root, "root is excluded");
        return Ok(leaves);
    }

    let Some(children) = store.list_children(root)? else {
        match store.read(root) {
            Ok(_) => {
                leaves.insert(root.clone());
            }
            Err(e) if e.is_not_found() => debug!(root = %root, "nothing at root"),
            Err(e) => return Err(e),
        }
        return Ok(leaves);
    };

    let mut pending = vec![(root.clone(), children)];
    while let Some((dir, children)) = pending.pop() {
        trace!(path = %dir, children = children.len(), "listing");
        let directories: HashSet<&str> = children
            .iter()
            .filter_map(|entry| entry.strip_suffix('/'))
            .collect();

        for entry in &children {
            let path = dir.child(entry)?;
            if excluded.covers(&path) {
                trace!(path = %path, "excluded");
                continue;
            }

            if entry.ends_with('/') {
                if let Some(grandchildren) = store.list_children(&path)? {
                    pending.push((path, grandchildren));
                }
            } else if directories.contains(entry.as_str()) {
                warn!(path = %path, "secret shadowed by a directory of the same name, skipping");
            } else {
                leaves.insert(path);
            }
        }
    }

    debug!(root = %root, leaves = leaves.len(), "listed");
    Ok(leaves)
}

/// Read every leaf under `root` into a snapshot.
///
/// A leaf that disappears between listing and reading is skipped.
///
/// # Errors
///
/// Returns `StoreError` on listing or read failures.
pub fn read_tree(store: &dyn Store, root: &SecretPath, excluded: &ExclusionSet) -> Result<Snapshot> {
    let mut snapshot = Snapshot::new();
    for path in list_leaves(store, root, excluded)? {
        match store.read(&path) {
            Ok(document) => snapshot.insert(path, document),
            Err(e) if e.is_not_found() => warn!(path = %path, "secret vanished while reading"),
            Err(e) => return Err(e),
        }
    }
    Ok(snapshot)
}

/// Read several roots into one combined snapshot.
pub fn read_trees(
    store: &dyn Store,
    roots: &[SecretPath],
    excluded: &ExclusionSet,
) -> Result<Snapshot> {
    let mut snapshot = Snapshot::new();
    for root in roots {
        let tree = read_tree(store, root, excluded)?;
        if tree.is_empty() {
            warn!(root = %root, "no secrets found");
        }
        snapshot.extend(tree);
    }
    Ok(snapshot)
}
