//! Authentication client: login persists the credential pair, failures
//! leave storage untouched.

mod helpers;

use std::sync::Arc;

use govdesk::api::audits::{AuditClient, AuditFilter};
use govdesk::api::auth::{AuthClient, NewUserRegistration};
use govdesk::auth::{CredentialStore, MemoryStore, SessionGuard, TOKEN_KEY, USER_KEY};
use govdesk::ApiError;

use helpers::MockBackend;

#[tokio::test]
async fn login_persists_token_and_user_together() {
    let backend = MockBackend::spawn().await;
    let store = Arc::new(MemoryStore::new());
    let session = SessionGuard::new(store.clone());
    let auth = AuthClient::new(&backend.base, session.clone());

    let logged_in = auth.login("admin", "secret").await.unwrap();
    assert_eq!(logged_in.token, backend.valid_token);
    assert_eq!(logged_in.user.username, "admin");

    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some(backend.valid_token.as_str()));
    assert!(store.get(USER_KEY).is_some());
    assert_eq!(session.current_user().unwrap().username, "admin");

    // the stored session now authenticates resource calls on its own
    let audits = AuditClient::new(&backend.base, session);
    let (records, _) = audits.list(&AuditFilter::default(), None).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn failed_login_surfaces_backend_message_without_storing() {
    let backend = MockBackend::spawn().await;
    let store = Arc::new(MemoryStore::new());
    let auth = AuthClient::new(&backend.base, SessionGuard::new(store.clone()));

    let err = auth.login("admin", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password");
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());
}

#[tokio::test]
async fn registration_returns_the_created_user() {
    let backend = MockBackend::spawn().await;
    let auth = AuthClient::new(&backend.base, SessionGuard::in_memory());

    let created = auth
        .register(&NewUserRegistration {
            name: "Siti Rahma".to_string(),
            username: "siti.rahma".to_string(),
            password: "changeme123".to_string(),
            role: "editor".to_string(),
            division: "Finance".to_string(),
        })
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.username, "siti.rahma");
    assert_eq!(created.division, "Finance");
}

#[tokio::test]
async fn registration_with_unknown_role_is_rejected_verbatim() {
    let backend = MockBackend::spawn().await;
    let auth = AuthClient::new(&backend.base, SessionGuard::in_memory());

    let err = auth
        .register(&NewUserRegistration {
            name: "Nobody".to_string(),
            username: "nobody".to_string(),
            password: "changeme123".to_string(),
            role: "superuser".to_string(),
            division: "IT".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Backend { status: Some(400), .. }));
    assert_eq!(err.to_string(), "Invalid role or group");
}

#[tokio::test]
async fn logout_clears_the_stored_pair() {
    let backend = MockBackend::spawn().await;
    let store = Arc::new(MemoryStore::new());
    let session = SessionGuard::new(store.clone());
    let auth = AuthClient::new(&backend.base, session);

    auth.login("admin", "secret").await.unwrap();
    assert!(store.get(TOKEN_KEY).is_some());

    auth.logout();
    assert!(store.get(TOKEN_KEY).is_none());
    assert!(store.get(USER_KEY).is_none());

    auth.logout(); // logging out twice is fine
}
