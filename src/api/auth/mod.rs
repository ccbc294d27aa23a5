//! External authentication service integration.
//!
//! Password hashing and token issuance happen server-side in a separate
//! service; this client only exchanges credentials for a session and
//! keeps the stored credential pair consistent.

pub mod client;
pub mod types;

pub use client::AuthClient;
pub use types::*;
