//! Per-service API clients.
//!
//! This module provides:
//! - The generic service client and response envelope (`http`, `envelope`)
//! - One typed client per governance backend service
//! - Health probes across all configured services (`health`)
//!
//! Every client is a thin instantiation of the same core: resource path,
//! typed records, and per-resource filters on top of the shared request
//! pipeline.

pub mod envelope;
pub mod health;
pub mod http;
pub mod types;

pub mod audits;
pub mod auth;
pub mod change_requests;
pub mod finance;
pub mod memos;
pub mod policies;
pub mod portfolio;
pub mod tasks;

pub use envelope::ApiEnvelope;
pub use health::{HealthCheck, ServiceHealth};
pub use http::ServiceClient;
pub use types::{FileAttachment, FileUpload};

use futures::future::join_all;

use crate::auth::SessionGuard;
use crate::config::ServiceConfig;

/// Every backend client wired to one shared session guard.
pub struct GovdeskApi {
    pub auth: auth::AuthClient,
    pub audits: audits::AuditClient,
    pub policies: policies::PolicyClient,
    pub memos: memos::MemoClient,
    pub finance: finance::FinanceClient,
    pub portfolio: portfolio::PortfolioClient,
    pub change_requests: change_requests::ChangeRequestClient,
    pub tasks: tasks::TaskClient,
}

impl GovdeskApi {
    pub fn new(config: &ServiceConfig, session: SessionGuard) -> Self {
        Self {
            auth: auth::AuthClient::new(&config.auth, session.clone()),
            audits: audits::AuditClient::new(&config.audits, session.clone()),
            policies: policies::PolicyClient::new(&config.policies, session.clone()),
            memos: memos::MemoClient::new(&config.memos, session.clone()),
            finance: finance::FinanceClient::new(&config.finance, session.clone()),
            portfolio: portfolio::PortfolioClient::new(&config.portfolio, session.clone()),
            change_requests: change_requests::ChangeRequestClient::new(
                &config.change_requests,
                session.clone(),
            ),
            tasks: tasks::TaskClient::new(&config.tasks, session),
        }
    }

    /// Probe every resource service concurrently. Order of the result
    /// follows the order of the clients, not completion order.
    pub async fn check_all(&self) -> Vec<ServiceHealth> {
        let clients: Vec<&dyn HealthCheck> = vec![
            &self.audits,
            &self.policies,
            &self.memos,
            &self.finance,
            &self.portfolio,
            &self.change_requests,
            &self.tasks,
        ];
        join_all(clients.iter().map(|client| client.health())).await
    }
}
