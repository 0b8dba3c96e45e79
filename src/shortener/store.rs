//! In-memory mapping store
//!
//! Holds the process-wide table from short URL to original URL, together
//! with the code generator that mints new keys. Entries are never removed
//! or overwritten for the life of the process.

use crate::shortener::codes::CodeGenerator;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

struct StoreInner {
    entries: HashMap<String, String>,
    generator: CodeGenerator,
}

/// Shared handle to the mapping table.
///
/// Cheap to clone; all clones see the same entries. Access from concurrent
/// connection tasks is serialized by the inner lock, and minting a code and
/// inserting its entry happen under a single write-lock acquisition so every
/// short URL is unique.
#[derive(Clone)]
pub struct MappingStore {
    inner: Arc<RwLock<StoreInner>>,
    host_prefix: String,
}

impl MappingStore {
    /// Create an empty store whose short URLs start with `host_prefix`
    /// (e.g. "localhost:8080").
    pub fn new(host_prefix: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                entries: HashMap::new(),
                generator: CodeGenerator::new(),
            })),
            host_prefix: host_prefix.to_string(),
        }
    }

    /// Exact-match lookup of `key` as a short URL.
    ///
    /// Returns the original URL it maps to, or None if `key` was never
    /// issued by this store.
    pub async fn lookup(&self, key: &str) -> Option<String> {
        self.inner.read().await.entries.get(key).cloned()
    }

    /// Mints a fresh short URL for `original` and records the mapping.
    ///
    /// Originals are not deduplicated: shortening the same string twice
    /// yields two distinct short URLs.
    pub async fn insert_new(&self, original: &str) -> String {
        let mut inner = self.inner.write().await;

        let short_url = format!("{}/{}", self.host_prefix, inner.generator.next_code());
        inner.entries.insert(short_url.clone(), original.to_string());

        tracing::info!(short = %short_url, original = %original, "Mapping stored");

        short_url
    }

    /// Number of mappings issued so far.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
