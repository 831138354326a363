//! Secret store clients.
//!
//! Everything that walks or moves secrets talks to a [`Store`], never to a
//! concrete transport, so the HTTP client can be swapped for the in-memory
//! double in tests.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `consul.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Consul { /* ... */ }
//!
//! impl Store for Consul {
//!     fn address(&self) -> &str { /* ... */ }
//!     fn list_children(&self, path: &SecretPath) -> Result<Option<Vec<String>>> {
//!         // Return child names, directories with a trailing '/'
//!     }
//!     fn read(&self, path: &SecretPath) -> Result<Document> { /* ... */ }
//!     fn write(&self, path: &SecretPath, document: &Document) -> Result<()> { /* ... */ }
//!     fn delete(&self, path: &SecretPath) -> Result<()> { /* ... */ }
//! }
//! ```

use crate::core::domain::Document;
use crate::core::path::SecretPath;
use crate::error::Result;

mod dry_run;
mod memory;
mod vault;

pub use dry_run::DryRun;
pub use memory::Memory;
pub use vault::{Endpoint, Vault};

/// Raw primitives of a hierarchical key/value secret store.
///
/// Implementations must be usable through a shared reference; a store may
/// be read from and written to by independent logical paths.
pub trait Store {
    /// Human-readable location of the store, used in logs.
    fn address(&self) -> &str;

    /// List the direct children of `path`.
    ///
    /// Intermediate nodes are returned with a trailing `/`.
    ///
    /// # Returns
    ///
    /// `None` if `path` has no children (it is a leaf or does not exist).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on transport or permission failures.
    fn list_children(&self, path: &SecretPath) -> Result<Option<Vec<String>>>;

    /// Whether `path` has children.
    fn is_listable(&self, path: &SecretPath) -> Result<bool> {
        Ok(self.list_children(path)?.is_some())
    }

    /// Read the document stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing is stored at `path`.
    fn read(&self, path: &SecretPath) -> Result<Document>;

    /// Replace the document stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PermissionDenied` or a transport error.
    fn write(&self, path: &SecretPath, document: &Document) -> Result<()>;

    /// Delete the document at `path`. Deleting a missing path succeeds.
    fn delete(&self, path: &SecretPath) -> Result<()>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn address(&self) -> &str {
        (**self).address()
    }

    fn list_children(&self, path: &SecretPath) -> Result<Option<Vec<String>>> {
        (**self).list_children(path)
    }

    fn read(&self, path: &SecretPath) -> Result<Document> {
        (**self).read(path)
    }

    fn write(&self, path: &SecretPath, document: &Document) -> Result<()> {
        (**self).write(path, document)
    }

    fn delete(&self, path: &SecretPath) -> Result<()> {
        (**self).delete(path)
    }
}
