//! Session token guard and credential storage.
//!
//! This module provides:
//! - Bearer token decoding and expiry checks (`token`)
//! - The session guard that gates every protected operation (`session`)
//! - Pluggable persistent key-value credential storage (`storage`)
//! - Token claim and stored-user types (`types`)
//!
//! All failure paths here degrade silently to "unauthenticated". The
//! guard is consulted on every protected-page render and must never
//! crash the UI.

pub mod session;
pub mod storage;
pub mod token;
pub mod types;

pub use session::{SessionGuard, TOKEN_KEY, USER_KEY};
pub use storage::{CredentialStore, FileStore, MemoryStore};
pub use token::{decode_token, is_token_expired};
pub use types::{StoredUser, TokenClaims};
