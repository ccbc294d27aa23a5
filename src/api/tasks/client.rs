//! Governance task service client.

use async_trait::async_trait;
use url::Url;

use crate::api::health::{HealthCheck, ServiceHealth};
use crate::api::http::ServiceClient;
use crate::auth::SessionGuard;
use crate::error::ApiResult;

use super::types::{GovernanceTask, GovernanceTaskUpdate, NewGovernanceTask, TaskFilter};

pub struct TaskClient {
    inner: ServiceClient,
}

impl TaskClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "tasks", session),
        }
    }

    pub async fn list(
        &self,
        filter: &TaskFilter,
        token: Option<&str>,
    ) -> ApiResult<(Vec<GovernanceTask>, u64)> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = &filter.status {
            query.push(("status", status.to_string()));
        }
        if let Some(assignee) = filter.assignee.as_deref().filter(|a| !a.is_empty()) {
            query.push(("assignee", assignee.to_string()));
        }
        self.inner.list(&query, token).await
    }

    pub async fn get(&self, id: &str, token: Option<&str>) -> ApiResult<GovernanceTask> {
        self.inner.get_one(id, token).await
    }

    pub async fn create(
        &self,
        task: &NewGovernanceTask,
        token: Option<&str>,
    ) -> ApiResult<GovernanceTask> {
        self.inner.create(task, token).await
    }

    pub async fn update(
        &self,
        id: &str,
        changes: &GovernanceTaskUpdate,
        token: Option<&str>,
    ) -> ApiResult<GovernanceTask> {
        self.inner.update(id, changes, token).await
    }

    pub async fn delete(&self, id: &str, token: Option<&str>) -> ApiResult<()> {
        self.inner.delete(id, token).await
    }

    pub async fn delete_many(&self, ids: &[String], token: Option<&str>) -> ApiResult<u64> {
        self.inner.delete_many(ids, token).await
    }
}

#[async_trait]
impl HealthCheck for TaskClient {
    fn service_name(&self) -> &'static str {
        "tasks"
    }

    async fn health(&self) -> ServiceHealth {
        self.inner.probe_health(self.service_name()).await
    }
}
