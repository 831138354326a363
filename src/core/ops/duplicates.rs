//! Find values shared by more than one secret key.

use std::collections::HashMap;

use tracing::debug;

use crate::core::domain::{DuplicateGroup, Snapshot};
use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::Store;
use crate::core::tree;
use crate::error::Result;

/// Group every `path:key` under `roots` by its exact value and keep the
/// groups with two or more members.
///
/// Path and key names play no part in grouping.
///
/// # Errors
///
/// Returns `StoreError` on listing or read failures.
pub fn find_duplicates(
    store: &dyn Store,
    roots: &[SecretPath],
    excluded: &ExclusionSet,
) -> Result<Vec<DuplicateGroup>> {
    let snapshot = tree::read_trees(store, roots, excluded)?;
    let groups = group_duplicates(&snapshot);
    debug!(secrets = snapshot.len(), groups = groups.len(), "duplicates grouped");
    Ok(groups)
}

/// Group the values of a snapshot. Groups are sorted by their first
/// locator.
pub fn group_duplicates(snapshot: &Snapshot) -> Vec<DuplicateGroup> {
    let mut by_value: HashMap<&str, Vec<String>> = HashMap::new();
    for (path, document) in snapshot.iter() {
        for (key, value) in document.iter() {
            by_value
                .entry(value)
                .or_default()
                .push(DuplicateGroup::locator(path, key));
        }
    }

    let mut groups: Vec<DuplicateGroup> = by_value
        .into_values()
        .filter_map(DuplicateGroup::new)
        .collect();
    groups.sort();
    groups
}
