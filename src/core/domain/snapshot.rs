//! Point-in-time view of a secret subtree.

use std::collections::BTreeMap;

use super::Document;
use crate::core::path::SecretPath;

/// Leaf paths mapped to their documents, as read in one pass.
///
/// Not kept in sync with the store after it is built.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    documents: BTreeMap<SecretPath, Document>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the document read at `path`.
    pub fn insert(&mut self, path: SecretPath, document: Document) {
        self.documents.insert(path, document);
    }

    /// Merge another snapshot into this one.
    pub fn extend(&mut self, other: Snapshot) {
        self.documents.extend(other.documents);
    }

    pub fn get(&self, path: &SecretPath) -> Option<&Document> {
        self.documents.get(path)
    }

    /// Leaf paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &SecretPath> {
        self.documents.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SecretPath, &Document)> {
        self.documents.iter()
    }

    /// Whether the snapshot holds exactly `path` and nothing else.
    pub fn is_only(&self, path: &SecretPath) -> bool {
        self.documents.len() == 1 && self.documents.contains_key(path)
    }

    /// Number of leaf secrets.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of keys across every document.
    pub fn values_count(&self) -> usize {
        self.documents.values().map(Document::len).sum()
    }
}
