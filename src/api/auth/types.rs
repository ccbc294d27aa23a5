//! Authentication service payloads.

use serde::{Deserialize, Serialize};

use crate::auth::StoredUser;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload: the bearer token and the user record the
/// dashboard persists together.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: StoredUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUserRegistration {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: String,
    pub division: String,
}
