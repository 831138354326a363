//! In-memory secret store.
//!
//! Emulates the listing convention of the HTTP store: children of a path
//! are returned by name, intermediate nodes with a trailing `/`. Used as
//! the test double and by the benchmarks.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use tracing::trace;

use super::Store;
use crate::core::domain::Document;
use crate::core::path::SecretPath;
use crate::error::{Result, StoreError};

/// A store backed by a map guarded with a lock.
#[derive(Debug, Default)]
pub struct Memory {
    name: String,
    documents: RwLock<BTreeMap<SecretPath, Document>>,
    denied: RwLock<Vec<SecretPath>>,
    calls: AtomicUsize,
}

impl Memory {
    /// Create an empty store identified by `name` in logs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seed a document directly, bypassing write denials.
    pub fn insert(&self, path: SecretPath, document: Document) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, document);
    }

    /// Copy of the document at `path`, if any.
    pub fn get(&self, path: &SecretPath) -> Option<Document> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Every stored path, sorted.
    pub fn paths(&self) -> Vec<SecretPath> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make writes and deletes at or under `prefix` fail with
    /// `StoreError::PermissionDenied`.
    pub fn deny(&self, prefix: SecretPath) {
        self.denied
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prefix);
    }

    /// Number of list and read calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn check_allowed(&self, path: &SecretPath) -> Result<()> {
        let denied = self.denied.read().unwrap_or_else(PoisonError::into_inner);
        if denied.iter().any(|prefix| path.starts_with(prefix)) {
            return Err(StoreError::PermissionDenied(path.to_string()).into());
        }
        Ok(())
    }
}

impl Store for Memory {
    fn address(&self) -> &str {
        &self.name
    }

    fn list_children(&self, path: &SecretPath) -> Result<Option<Vec<String>>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);

        let depth = path.depth();
        let children: BTreeSet<String> = documents
            .keys()
            .filter(|key| key.depth() > depth && key.starts_with(path))
            .map(|key| {
                let name = &key.segments()[depth];
                if key.depth() > depth + 1 {
                    format!("{}/", name)
                } else {
                    name.clone()
                }
            })
            .collect();

        trace!(path = %path, children = children.len(), "memory list");
        if children.is_empty() {
            Ok(None)
        } else {
            Ok(Some(children.into_iter().collect()))
        }
    }

    fn read(&self, path: &SecretPath) -> Result<Document> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.get(path)
            .ok_or_else(|| StoreError::NotFound(path.to_string()).into())
    }

    fn write(&self, path: &SecretPath, document: &Document) -> Result<()> {
        self.check_allowed(path)?;
        self.insert(path.clone(), document.clone());
        Ok(())
    }

    fn delete(&self, path: &SecretPath) -> Result<()> {
        self.check_allowed(path)?;
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
        Ok(())
    }
}
