//! Dry-run store decorator.
//!
//! Reads and listings go to the wrapped store; writes and deletes are only
//! logged.

use tracing::info;

use super::Store;
use crate::core::domain::Document;
use crate::core::path::SecretPath;
use crate::error::Result;

/// Wraps a store so that nothing is ever mutated.
#[derive(Debug)]
pub struct DryRun<S> {
    inner: S,
}

impl<S: Store> DryRun<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Store> Store for DryRun<S> {
    fn address(&self) -> &str {
        self.inner.address()
    }

    fn list_children(&self, path: &SecretPath) -> Result<Option<Vec<String>>> {
        self.inner.list_children(path)
    }

    fn read(&self, path: &SecretPath) -> Result<Document> {
        self.inner.read(path)
    }

    fn write(&self, path: &SecretPath, document: &Document) -> Result<()> {
        info!(
            address = self.inner.address(),
            path = %path,
            keys = document.len(),
            "dry run: skipping write"
        );
        Ok(())
    }

    fn delete(&self, path: &SecretPath) -> Result<()> {
        info!(address = self.inner.address(), path = %path, "dry run: skipping delete");
        Ok(())
    }
}
