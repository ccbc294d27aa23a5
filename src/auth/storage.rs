//! Persistent key-value credential storage.
//!
//! The dashboard keeps exactly two keys: the bearer token and the
//! serialized user record. Storage is injected into the session guard
//! rather than reached through ambient globals, so call sites never
//! touch keys directly.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::warn;

/// Key-value storage behind the session guard.
///
/// Mutation must be infallible from the caller's perspective: an
/// implementation that cannot persist logs the problem and carries on,
/// because the guard's failure mode is "unauthenticated", never a crash.
/// Removing a missing key is a no-op, keeping credential clearing
/// idempotent.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and short-lived tooling.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.lock().unwrap().remove(key);
    }
}

/// File-backed store: one small JSON object on disk, rewritten whole on
/// every mutation. Concurrent writers cannot corrupt it beyond a lost
/// update, which for two credential keys is indistinguishable from
/// "credential absent".
pub struct FileStore {
    path: PathBuf,
    cache: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store at `path`. An existing file must hold
    /// a JSON string-to-string object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read credential store {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| {
                format!("credential store {} is not a JSON object", path.display())
            })?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    fn persist(&self, map: &HashMap<String, String>) {
        let payload = match serde_json::to_string_pretty(map) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "could not serialize credential store");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, payload) {
            warn!(path = %self.path.display(), error = %err, "could not persist credential store");
        }
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut cache = self.cache.lock().unwrap();
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache);
    }

    fn remove(&self, key: &str) {
        let mut cache = self.cache.lock().unwrap();
        if cache.remove(key).is_some() {
            self.persist(&cache);
        }
    }
}
