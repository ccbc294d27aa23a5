//! Govdesk - Dashboard Client Core
//!
//! This crate provides the functional core of the govdesk administrative
//! dashboard: a session token guard and one typed API client per governance
//! backend service (audits, policies, memos, finance projects, portfolio
//! projects, change requests, governance tasks).
//!
//! ## Architecture
//! All credential reads and writes flow through the session guard:
//! Credential Store -> Session Guard -> Service Client -> Backend Service
//!
//! Each resource client is an instantiation of one generic service client
//! that attaches the bearer token, normalizes the backend response envelope,
//! and maps failures into a single error taxonomy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use govdesk::{GovdeskApi, ServiceConfig, SessionGuard};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig::from_env()?;
//!     let api = GovdeskApi::new(&config, SessionGuard::in_memory());
//!     let session = api.auth.login("admin", "secret").await?;
//!     println!("logged in as {}", session.user.name);
//!
//!     let (audits, total) = api.audits.list(&Default::default(), None).await?;
//!     println!("showing {} of {} audits", audits.len(), total);
//!     Ok(())
//! }
//! ```

// Core error handling
pub mod error;

// Backend service endpoints
pub mod config;

// Session token guard and credential storage
pub mod auth;

// Per-service API clients
pub mod api;

pub use api::GovdeskApi;
pub use auth::SessionGuard;
pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
