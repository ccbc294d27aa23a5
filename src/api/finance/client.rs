//! Finance service client.

use async_trait::async_trait;
use url::Url;

use crate::api::health::{HealthCheck, ServiceHealth};
use crate::api::http::ServiceClient;
use crate::api::types::FileUpload;
use crate::auth::SessionGuard;
use crate::error::ApiResult;

use super::types::{FinanceFilter, FinanceProject, FinanceProjectUpdate, NewFinanceProject};

pub struct FinanceClient {
    inner: ServiceClient,
}

impl FinanceClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "finance-projects", session),
        }
    }

    pub async fn list(
        &self,
        filter: &FinanceFilter,
        token: Option<&str>,
    ) -> ApiResult<(Vec<FinanceProject>, u64)> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = &filter.status {
            query.push(("status", status.to_string()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        self.inner.list(&query, token).await
    }

    pub async fn get(&self, id: &str, token: Option<&str>) -> ApiResult<FinanceProject> {
        self.inner.get_one(id, token).await
    }

    pub async fn create(
        &self,
        project: &NewFinanceProject,
        token: Option<&str>,
    ) -> ApiResult<FinanceProject> {
        self.inner.create(project, token).await
    }

    /// Create with contract documents attached; one multipart form with
    /// the payment schedule JSON-encoded alongside the scalar fields.
    pub async fn create_with_files(
        &self,
        project: &NewFinanceProject,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<FinanceProject> {
        self.inner
            .create_with_files(project.form_fields(), files, token)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        changes: &FinanceProjectUpdate,
        token: Option<&str>,
    ) -> ApiResult<FinanceProject> {
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
impl HealthCheck for FinanceClient {
    fn service_name(&self) -> &'static str {
        "finance-projects"
    }

    async fn health(&self) -> ServiceHealth {
        self.inner.probe_health(self.service_name()).await
    }
}
