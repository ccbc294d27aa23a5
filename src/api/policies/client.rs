//! Policy service client.

use async_trait::async_trait;
use url::Url;

use crate::api::health::{HealthCheck, ServiceHealth};
use crate::api::http::ServiceClient;
use crate::api::types::FileUpload;
use crate::auth::SessionGuard;
use crate::error::ApiResult;

use super::types::{NewPolicy, Policy, PolicyFilter, PolicyUpdate};

pub struct PolicyClient {
    inner: ServiceClient,
}

impl PolicyClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "policies", session),
        }
    }

    pub async fn list(
        &self,
        filter: &PolicyFilter,
        token: Option<&str>,
    ) -> ApiResult<(Vec<Policy>, u64)> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = &filter.category {
            query.push(("category", category.to_string()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        self.inner.list(&query, token).await
    }

    pub async fn get(&self, id: &str, token: Option<&str>) -> ApiResult<Policy> {
        self.inner.get_one(id, token).await
    }

    pub async fn create(&self, policy: &NewPolicy, token: Option<&str>) -> ApiResult<Policy> {
        self.inner.create(policy, token).await
    }

    /// Create with attachments; submitted as one multipart form.
    pub async fn create_with_files(
        &self,
        policy: &NewPolicy,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<Policy> {
        self.inner
            .create_with_files(policy.form_fields(), files, token)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        changes: &PolicyUpdate,
        token: Option<&str>,
    ) -> ApiResult<Policy> {
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
impl HealthCheck for PolicyClient {
    fn service_name(&self) -> &'static str {
        "policies"
    }

    async fn health(&self) -> ServiceHealth {
        self.inner.probe_health(self.service_name()).await
    }
}
