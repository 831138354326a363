//! In-memory secret tree fixtures.

use vaultkv::core::domain::Document;
use vaultkv::core::path::SecretPath;
use vaultkv::core::store::Memory;

/// Parse a path, panicking on malformed input.
pub fn p(raw: &str) -> SecretPath {
    SecretPath::parse(raw).expect("valid test path")
}

/// Build a document from key/value pairs.
pub fn doc(pairs: &[(&str, &str)]) -> Document {
    pairs.iter().copied().collect()
}

/// Build a store holding the given secrets.
pub fn store(name: &str, secrets: &[(&str, &[(&str, &str)])]) -> Memory {
    let store = Memory::new(name);
    for (path, pairs) in secrets {
        store.insert(p(path), doc(pairs));
    }
    store
}

/// A small application tree used across tests.
pub fn app_tree() -> Memory {
    store(
        "source",
        &[
            ("secret/app/db", &[("user", "admin"), ("pass", "hunter2")]),
            ("secret/app/api", &[("key", "sk-test-12345")]),
            ("secret/app/web/session", &[("signing_key", "hunter2")]),
            ("secret/app/legacy/old", &[("pass", "hunter2")]),
            ("secret/appendix", &[("note", "unrelated")]),
            ("secret/infra/dns", &[("token", "dns-token")]),
        ],
    )
}
