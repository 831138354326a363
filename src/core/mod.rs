//! Core library components.
//!
//! Path model, store abstraction, tree traversal and the reconciliation
//! operations built on top of them. Nothing in here prints to the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod exclusion;
pub mod ops;
pub mod path;
pub mod store;
pub mod tree;
