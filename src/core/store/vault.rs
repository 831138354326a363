//! HashiCorp Vault store over the HTTP API.
//!
//! Talks to a KV (version 1 layout) secrets engine: the mount is simply the
//! first segment of every path.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::Store;
use crate::core::constants;
use crate::core::domain::Document;
use crate::core::path::SecretPath;
use crate::error::{ConfigError, Error, Result, StoreError};

/// Connection settings for one Vault instance.
#[derive(Clone)]
pub struct Endpoint {
    /// Base URL, e.g. `https://vault.example.com:8200`.
    pub address: String,
    /// Token sent as `X-Vault-Token`.
    pub token: Zeroizing<String>,
    /// Accept invalid TLS certificates.
    pub skip_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: Zeroizing::new(token.into()),
            skip_tls: false,
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("address", &self.address)
            .field("token", &"<redacted>")
            .field("skip_tls", &self.skip_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Deserialize)]
struct ListData {
    keys: Vec<String>,
}

#[derive(Deserialize)]
struct ReadResponse {
    data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Clone, Copy)]
enum Op {
    List,
    Read,
    Write,
    Delete,
}

/// Authenticated Vault client.
pub struct Vault {
    address: String,
    base: Url,
    token: Zeroizing<String>,
    client: Client,
}

impl fmt::Debug for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vault")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Vault {
    /// Build a client for `endpoint` and verify its token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAddress` for a non-HTTP address,
    /// `StoreError::Connection` if the server cannot be reached and
    /// `StoreError::Auth` if the token is rejected.
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let vault = Self::build(endpoint)?;
        vault.authenticate()?;
        Ok(vault)
    }

    /// Client for `endpoint`, without checking its token.
    fn build(endpoint: &Endpoint) -> Result<Self> {
        let address = endpoint.address.trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidAddress(endpoint.address.clone());
        let base = Url::parse(&address).map_err(|_| invalid())?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(invalid().into());
        }

        if endpoint.skip_tls {
            warn!(address = %address, "TLS verification disabled");
        }

        let client = Client::builder()
            .timeout(endpoint.timeout)
            .danger_accept_invalid_certs(endpoint.skip_tls)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            address,
            base,
            token: endpoint.token.clone(),
            client,
        })
    }

    fn authenticate(&self) -> Result<()> {
        debug!(address = %self.address, "authenticating");
        let url = self.url(constants::TOKEN_LOOKUP_PATH.split('/'))?;
        let response = self.send(self.client.get(url))?;

        if response.status().is_success() {
            debug!(address = %self.address, "token accepted");
            Ok(())
        } else {
            Err(StoreError::Auth {
                address: self.address.clone(),
                reason: reason(response),
            }
            .into())
        }
    }

    /// `<address>/v1/<segments>`, each segment percent-encoded on its own
    /// so `#`, `?`, `%` and `/` inside a key name stay part of the path.
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::InvalidAddress(self.address.clone()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }

    fn secret_url(&self, path: &SecretPath) -> Result<Url> {
        self.url(path.segments().iter().map(String::as_str))
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        request
            .header(constants::TOKEN_HEADER, self.token.as_str())
            .send()
            .map_err(|e| {
                StoreError::Connection {
                    address: self.address.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    fn failure(&self, op: Op, path: &SecretPath, response: Response) -> Error {
        let path = path.to_string();
        if response.status() == StatusCode::FORBIDDEN {
            return StoreError::PermissionDenied(path).into();
        }

        let reason = reason(response);
        match op {
            Op::List => StoreError::List { path, reason },
            Op::Read => StoreError::Read { path, reason },
            Op::Write => StoreError::Write { path, reason },
            Op::Delete => StoreError::Delete { path, reason },
        }
        .into()
    }
}

/// Status line plus any error messages Vault returned.
fn reason(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>() {
        Ok(body) if !body.errors.is_empty() => format!("{}: {}", status, body.errors.join("; ")),
        _ => status.to_string(),
    }
}

fn invalid(path: &SecretPath, e: reqwest::Error) -> Error {
    StoreError::InvalidResponse {
        path: path.to_string(),
        reason: e.to_string(),
    }
    .into()
}

impl Store for Vault {
    fn address(&self) -> &str {
        &self.address
    }

    fn list_children(&self, path: &SecretPath) -> Result<Option<Vec<String>>> {
        let response = self.send(
            self.client
                .get(self.secret_url(path)?)
                .query(&[("list", "true")]),
        )?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: ListResponse = response.json().map_err(|e| invalid(path, e))?;
                Ok(Some(body.data.keys).filter(|keys| !keys.is_empty()))
            }
            _ => Err(self.failure(Op::List, path, response)),
        }
    }

    fn read(&self, path: &SecretPath) -> Result<Document> {
        let response = self.send(self.client.get(self.secret_url(path)?))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(path.to_string()).into()),
            status if status.is_success() => {
                let body: ReadResponse = response.json().map_err(|e| invalid(path, e))?;
                Ok(body
                    .data
                    .into_iter()
                    .map(|(key, value)| match value {
                        serde_json::Value::String(s) => (key, s),
                        other => (key, other.to_string()),
                    })
                    .collect())
            }
            _ => Err(self.failure(Op::Read, path, response)),
        }
    }

    fn write(&self, path: &SecretPath, document: &Document) -> Result<()> {
        let response = self.send(self.client.post(self.secret_url(path)?).json(document))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.failure(Op::Write, path, response))
        }
    }

    fn delete(&self, path: &SecretPath) -> Result<()> {
        let response = self.send(self.client.delete(self.secret_url(path)?))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            _ => Err(self.failure(Op::Delete, path, response)),
        }
    }
}
