//! Mock Vault server helpers.
//!
//! wiremock is async while the store client is blocking, so the server and
//! its mounts are driven through a private runtime and the client runs on
//! the test thread.

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vaultkv::core::store::{Endpoint, Vault};

/// Token every mock accepts.
pub const MOCK_TOKEN: &str = "hvs.mock-token";

/// A Vault HTTP API stand-in.
pub struct MockVault {
    // Dropped before the runtime that started it.
    server: MockServer,
    runtime: Runtime,
}

impl MockVault {
    /// Start a server that accepts [`MOCK_TOKEN`].
    pub fn start() -> Self {
        let vault = Self::bare();
        vault.mount(
            Mock::given(method("GET"))
                .and(path("/v1/auth/token/lookup-self"))
                .and(header("X-Vault-Token", MOCK_TOKEN))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}}))),
        );
        vault
    }

    /// Start a server with no mocks mounted.
    pub fn bare() -> Self {
        let runtime = Runtime::new().expect("failed to start runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Connect a client with [`MOCK_TOKEN`].
    pub fn connect(&self) -> Vault {
        Vault::connect(&Endpoint::new(self.uri(), MOCK_TOKEN)).expect("failed to connect")
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Answer `GET <raw_path>?list=true`.
    pub fn list(&self, raw_path: &str, status: u16, keys: &[&str]) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(raw_path))
                .and(query_param("list", "true"))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(json!({"data": {"keys": keys}})),
                ),
        );
    }

    /// Answer `GET <raw_path>` with `data` as the secret body.
    pub fn read(&self, raw_path: &str, status: u16, data: Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(raw_path))
                .respond_with(ResponseTemplate::new(status).set_body_json(json!({"data": data}))),
        );
    }

    /// Answer `<verb> <raw_path>` with a bare status, expecting `times` calls.
    pub fn expect(&self, verb: &str, raw_path: &str, status: u16, times: u64) {
        self.mount(
            Mock::given(method(verb))
                .and(path(raw_path))
                .respond_with(ResponseTemplate::new(status))
                .expect(times),
        );
    }

    /// Answer `<verb> <raw_path>` with Vault's error body.
    pub fn fail(&self, verb: &str, raw_path: &str, status: u16, message: &str) {
        self.mount(
            Mock::given(method(verb))
                .and(path(raw_path))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(json!({"errors": [message]})),
                ),
        );
    }

    /// Check every `expect` count, panicking on a mismatch.
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}
