//! vaultkv - walk, copy, delete, count and deduplicate Vault KV secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── connect       # Flags + config file -> authenticated stores
//! │   ├── copy          # copy-path, copy-secret
//! │   ├── delete        # delete
//! │   ├── report        # count, find-duplicates, secrets-tree
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Optional config.toml
//!     ├── path          # SecretPath and rebasing
//!     ├── exclusion     # Excluded prefixes
//!     ├── domain/       # Document, Snapshot, reports
//!     ├── store/        # Store trait
//!     │   ├── vault     # HTTP client
//!     │   ├── memory    # In-memory store
//!     │   └── dry_run   # Read-only decorator
//!     ├── tree          # Leaf listing and snapshots
//!     └── ops/          # Copy, delete, count, duplicates, tree
//! ```
//!
//! # Example
//!
//! ```
//! use vaultkv::core::exclusion::ExclusionSet;
//! use vaultkv::core::ops;
//! use vaultkv::core::path::SecretPath;
//! use vaultkv::core::store::Memory;
//!
//! let store = Memory::new("local");
//! let db = SecretPath::parse("app/db").unwrap();
//! store.insert(db, [("user", "a"), ("pass", "b")].into_iter().collect());
//!
//! let roots = [SecretPath::parse("app").unwrap()];
//! let report = ops::count(&store, &roots, &ExclusionSet::none()).unwrap();
//! assert_eq!(report.total().values_count, 2);
//! ```

pub mod cli;
pub mod core;
pub mod error;
