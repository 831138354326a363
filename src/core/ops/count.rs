//! Count secrets and values under roots.

use tracing::{debug, warn};

use crate::core::domain::{CountReport, Counts};
use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::Store;
use crate::core::tree;
use crate::error::Result;

/// Count leaf secrets and their keys under each root.
///
/// Documents are read one at a time and only their sizes are kept. Roots
/// with nothing under them are reported with zero counts.
///
/// # Errors
///
/// Returns `StoreError` on listing or read failures.
pub fn count(store: &dyn Store, roots: &[SecretPath], excluded: &ExclusionSet) -> Result<CountReport> {
    let mut report = CountReport::new();

    for root in roots {
        let mut counts = Counts::default();
        for leaf in tree::list_leaves(store, root, excluded)? {
            match store.read(&leaf) {
                Ok(document) => {
                    counts.secrets_count += 1;
                    counts.values_count += document.len();
                }
                Err(e) if e.is_not_found() => warn!(path = %leaf, "secret vanished while counting"),
                Err(e) => return Err(e),
            }
        }

        if counts.secrets_count == 0 {
            warn!(root = %root, "no secrets found");
        }
        debug!(
            root = %root,
            secrets = counts.secrets_count,
            values = counts.values_count,
            "counted"
        );
        report.record(root.to_string(), counts);
    }

    let total = report.total();
    debug!(
        secrets = total.secrets_count,
        values = total.values_count,
        "total"
    );
    Ok(report)
}
