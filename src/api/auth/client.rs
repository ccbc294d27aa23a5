//! Authentication service client.

use tracing::debug;
use url::Url;

use crate::api::http::ServiceClient;
use crate::auth::{SessionGuard, StoredUser};
use crate::error::ApiResult;

use super::types::{AuthSession, LoginRequest, NewUserRegistration};

pub struct AuthClient {
    inner: ServiceClient,
}

impl AuthClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "auth", session),
        }
    }

    /// Exchange credentials for a session. On success the token and
    /// user record are persisted together through the guard before the
    /// session is handed back.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthSession> {
        let url = format!("{}/login", self.inner.collection_url());
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let session: AuthSession = self.inner.post_at(&url, &payload, None).await?;
        self.inner
            .session()
            .store_session(&session.token, &session.user);
        debug!(user = %session.user.username, "login stored new session");
        Ok(session)
    }

    /// Register a new dashboard user. No session side effects.
    pub async fn register(&self, registration: &NewUserRegistration) -> ApiResult<StoredUser> {
        let url = format!("{}/register", self.inner.collection_url());
        self.inner.post_at(&url, registration, None).await
    }

    /// Client-side logout: drop the stored credential pair.
    pub fn logout(&self) {
        self.inner.session().clear_auth_data();
    }
}
