//! Enumerate secret paths without reading them.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::Store;
use crate::core::tree;
use crate::error::Result;

/// Leaf paths under each root. No document content is read.
///
/// # Errors
///
/// Returns `StoreError` on listing failures.
pub fn secrets_tree(
    store: &dyn Store,
    roots: &[SecretPath],
    excluded: &ExclusionSet,
) -> Result<BTreeMap<SecretPath, BTreeSet<SecretPath>>> {
    let mut listing = BTreeMap::new();
    for root in roots {
        let leaves = tree::list_leaves(store, root, excluded)?;
        if leaves.is_empty() {
            warn!(root = %root, "no secrets found");
        }
        listing.insert(root.clone(), leaves);
    }
    Ok(listing)
}
