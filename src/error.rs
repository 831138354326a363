//! Error types.
//!
//! Each layer has its own error enum; [`Error`] wraps them so callers can
//! propagate everything with `?` and `main` can pick a hint per variant.

use thiserror::Error;

use crate::core::path::SecretPath;

/// Top-level error for all vaultkv operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connection and configuration-file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required connection arguments were not supplied.
    #[error("missing required arguments: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid vault address '{0}': must start with http:// or https://")]
    InvalidAddress(String),

    #[error("failed to build http client: {0}")]
    Client(String),
}

/// Malformed secret paths.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("secret path is empty")]
    Empty,

    #[error("secret path '{0}' contains an empty segment")]
    EmptySegment(String),

    #[error("'{path}' is not under '{root}'")]
    OutsideRoot { path: String, root: String },
}

/// Failures reported by a secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("authentication to {address} failed: {reason}")]
    Auth { address: String, reason: String },

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("permission denied on '{0}'")]
    PermissionDenied(String),

    #[error("cannot reach {address}: {reason}")]
    Connection { address: String, reason: String },

    #[error("failed to list '{path}': {reason}")]
    List { path: String, reason: String },

    #[error("failed to read '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("failed to write '{path}': {reason}")]
    Write { path: String, reason: String },

    #[error("failed to delete '{path}': {reason}")]
    Delete { path: String, reason: String },

    #[error("unexpected response for '{path}': {reason}")]
    InvalidResponse { path: String, reason: String },
}

/// Refusals and partial failures of the reconciliation operations.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("nothing to copy at '{0}'")]
    NothingToCopy(String),

    #[error("'{0}' is a single secret, copy-path only copies trees")]
    AmbiguousTarget(String),

    #[error("'{0}' is not a valid secret")]
    NotASecret(String),

    /// A copy stopped part way; the `copied` pairs already landed.
    #[error("copy interrupted at '{path}' after {} secrets: {source}", .copied.len())]
    Interrupted {
        path: String,
        copied: Vec<(SecretPath, SecretPath)>,
        #[source]
        source: Box<Error>,
    },

    #[error("delete failed for {failed} of {total} paths")]
    DeleteFailed { failed: usize, total: usize },
}

impl StoreError {
    /// Whether the error means the path simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl Error {
    /// Whether this wraps [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(e) if e.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
