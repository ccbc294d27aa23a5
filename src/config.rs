//! Backend service endpoints.
//!
//! Each governance resource lives in its own backend service. Base URLs
//! come from the environment (with `.env` support) and default to one
//! localhost port per service for local development.

use anyhow::{Context, Result};
use url::Url;

const DEFAULT_AUTH_URL: &str = "http://localhost:5000";
const DEFAULT_AUDIT_URL: &str = "http://localhost:5001";
const DEFAULT_POLICY_URL: &str = "http://localhost:5002";
const DEFAULT_MEMO_URL: &str = "http://localhost:5003";
const DEFAULT_FINANCE_URL: &str = "http://localhost:5004";
const DEFAULT_PORTFOLIO_URL: &str = "http://localhost:5005";
const DEFAULT_CHANGE_REQUEST_URL: &str = "http://localhost:5006";
const DEFAULT_TASK_URL: &str = "http://localhost:5007";

/// Base URLs for every backend service the dashboard talks to.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub auth: Url,
    pub audits: Url,
    pub policies: Url,
    pub memos: Url,
    pub finance: Url,
    pub portfolio: Url,
    pub change_requests: Url,
    pub tasks: Url,
}

impl ServiceConfig {
    /// Resolve the configuration from environment variables, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            auth: env_url("GOVDESK_AUTH_URL", DEFAULT_AUTH_URL)?,
            audits: env_url("GOVDESK_AUDIT_URL", DEFAULT_AUDIT_URL)?,
            policies: env_url("GOVDESK_POLICY_URL", DEFAULT_POLICY_URL)?,
            memos: env_url("GOVDESK_MEMO_URL", DEFAULT_MEMO_URL)?,
            finance: env_url("GOVDESK_FINANCE_URL", DEFAULT_FINANCE_URL)?,
            portfolio: env_url("GOVDESK_PORTFOLIO_URL", DEFAULT_PORTFOLIO_URL)?,
            change_requests: env_url("GOVDESK_CHANGE_REQUEST_URL", DEFAULT_CHANGE_REQUEST_URL)?,
            tasks: env_url("GOVDESK_TASK_URL", DEFAULT_TASK_URL)?,
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_defaults().expect("default service URLs must parse")
    }
}

impl ServiceConfig {
    fn from_defaults() -> Result<Self> {
        Ok(Self {
            auth: Url::parse(DEFAULT_AUTH_URL)?,
            audits: Url::parse(DEFAULT_AUDIT_URL)?,
            policies: Url::parse(DEFAULT_POLICY_URL)?,
            memos: Url::parse(DEFAULT_MEMO_URL)?,
            finance: Url::parse(DEFAULT_FINANCE_URL)?,
            portfolio: Url::parse(DEFAULT_PORTFOLIO_URL)?,
            change_requests: Url::parse(DEFAULT_CHANGE_REQUEST_URL)?,
            tasks: Url::parse(DEFAULT_TASK_URL)?,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).with_context(|| format!("invalid URL in {var}: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn defaults_are_distinct_localhost_ports() {
        let config = ServiceConfig::default();
        let ports: HashSet<u16> = [
            &config.auth,
            &config.audits,
            &config.policies,
            &config.memos,
            &config.finance,
            &config.portfolio,
            &config.change_requests,
            &config.tasks,
        ]
        .iter()
        .map(|u| u.port().expect("default URL has a port"))
        .collect();
        assert_eq!(ports.len(), 8, "every service gets its own port");
    }
}
