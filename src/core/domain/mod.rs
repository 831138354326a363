//! Domain types.

mod count;
mod delete;
mod document;
mod duplicate;
mod snapshot;

pub use count::{CountReport, Counts};
pub use delete::DeleteOutcome;
pub use document::Document;
pub use duplicate::DuplicateGroup;
pub use snapshot::Snapshot;
