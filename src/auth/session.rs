//! The session guard: the single gatekeeper for stored credentials.
//!
//! Only this type mutates the credential store. API clients ask it for
//! a usable token before each request; expired or undecodable tokens
//! are discarded as a side effect of the read.

use std::sync::Arc;

use tracing::debug;

use super::storage::{CredentialStore, MemoryStore};
use super::token::is_token_expired;
use super::types::StoredUser;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Session guard over an injected credential store.
///
/// Cheap to clone; clones share the same underlying store. Every
/// accessor degrades silently to "unauthenticated" rather than raising,
/// because the guard runs on every protected-page render.
#[derive(Clone)]
pub struct SessionGuard {
    store: Arc<dyn CredentialStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Guard over a fresh in-memory store. Useful for tests and tools
    /// that log in programmatically each run.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The stored token, if present and not expired.
    ///
    /// A stored token that fails the expiry check is erased together
    /// with the user record before `None` is returned, so stale
    /// credentials never survive a read.
    pub fn get_valid_token(&self) -> Option<String> {
        let token = self.store.get(TOKEN_KEY)?;
        if is_token_expired(&token) {
            debug!("stored token expired or undecodable, clearing credentials");
            self.clear_auth_data();
            return None;
        }
        Some(token)
    }

    /// Persist the token and user record together, as one login.
    pub fn store_session(&self, token: &str, user: &StoredUser) {
        self.store.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(serialized) => self.store.set(USER_KEY, &serialized),
            Err(_) => self.store.remove(USER_KEY),
        }
    }

    /// The stored user record, if present and well-formed.
    pub fn current_user(&self) -> Option<StoredUser> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Idempotent removal of both credential keys.
    pub fn clear_auth_data(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}
