//! Service health probes.
//!
//! Every backend exposes `GET {base}/api/health`. The probe is the one
//! place in the client layer that enforces its own timeout.

use std::time::Duration;

use async_trait::async_trait;

/// Timeout applied to health probes only.
pub(crate) const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of probing one backend service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHealth {
    pub service: String,
    pub healthy: bool,
    pub detail: String,
}

impl ServiceHealth {
    pub(crate) fn up(service: &'static str) -> Self {
        Self {
            service: service.to_string(),
            healthy: true,
            detail: "ok".to_string(),
        }
    }

    pub(crate) fn down(service: &'static str, detail: String) -> Self {
        Self {
            service: service.to_string(),
            healthy: false,
            detail,
        }
    }
}

/// Implemented by every resource client so callers can sweep all
/// configured services at once.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    fn service_name(&self) -> &'static str;
    async fn health(&self) -> ServiceHealth;
}
