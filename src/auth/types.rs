//! Token claim and stored-user types.

use serde::{Deserialize, Serialize};

/// Claims carried in the payload segment of a bearer token.
///
/// Only `expiresAt` is load-bearing for the client; the remaining
/// fields default when a backend omits them so that an otherwise valid
/// token is not rejected for cosmetic reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
    #[serde(rename = "issuedAt", default)]
    pub issued_at: i64,
    #[serde(rename = "subjectId", default)]
    pub subject_id: String,
    #[serde(rename = "subjectName", default)]
    pub subject_name: String,
    #[serde(default)]
    pub role: String,
}

/// User record persisted alongside the token. Set together with the
/// token on login, cleared together on logout or detected expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: String,
    pub division: String,
}
