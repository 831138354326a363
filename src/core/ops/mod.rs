//! Reconciliation operations.
//!
//! Each operation is a short orchestration over [`crate::core::tree`] and a
//! [`crate::core::store::Store`]. Copies take two stores, which may point at
//! the same instance or at two independent ones.

mod copy;
mod count;
mod delete;
mod duplicates;
mod secrets_tree;

pub use copy::{copy_path, copy_secret, CopyReport};
pub use count::count;
pub use delete::{delete_subtrees, ensure_deleted};
pub use duplicates::{find_duplicates, group_duplicates};
pub use secrets_tree::secrets_tree;
