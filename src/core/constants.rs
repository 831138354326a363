//! Constants used throughout vaultkv.
//!
//! Centralizes environment variable names, file names and defaults.

/// Header carrying the Vault token on every request.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// Endpoint used to verify a token when connecting.
pub const TOKEN_LOOKUP_PATH: &str = "auth/token/lookup-self";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Source instance address.
pub const ENV_VAULT_ADDR: &str = "VAULT_ADDR";

/// Source instance token.
pub const ENV_VAULT_TOKEN: &str = "VAULT_TOKEN";

/// Target instance address for copies.
pub const ENV_VAULT_TARGET_ADDR: &str = "VAULT_TARGET_ADDR";

/// Target instance token for copies.
pub const ENV_VAULT_TARGET_TOKEN: &str = "VAULT_TARGET_TOKEN";

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "VAULTKV_CONFIG";

/// Log filter directives (same syntax as `RUST_LOG`).
pub const ENV_LOG: &str = "VAULTKV_LOG";

/// Directory under the platform config dir holding the config file.
pub const CONFIG_DIR: &str = "vaultkv";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";
