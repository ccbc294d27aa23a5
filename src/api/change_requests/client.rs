//! Change request service client.

use async_trait::async_trait;
use url::Url;

use crate::api::health::{HealthCheck, ServiceHealth};
use crate::api::http::ServiceClient;
use crate::api::types::FileUpload;
use crate::auth::SessionGuard;
use crate::error::ApiResult;

use super::types::{ChangeRequest, ChangeRequestFilter, ChangeRequestUpdate, NewChangeRequest};

pub struct ChangeRequestClient {
    inner: ServiceClient,
}

impl ChangeRequestClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "change-requests", session),
        }
    }

    pub async fn list(
        &self,
        filter: &ChangeRequestFilter,
        token: Option<&str>,
    ) -> ApiResult<(Vec<ChangeRequest>, u64)> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = &filter.status {
            query.push(("status", status.to_string()));
        }
        if let Some(division) = filter.division.as_deref().filter(|d| !d.is_empty()) {
            query.push(("division", division.to_string()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        self.inner.list(&query, token).await
    }

    pub async fn get(&self, id: &str, token: Option<&str>) -> ApiResult<ChangeRequest> {
        self.inner.get_one(id, token).await
    }

    pub async fn create(
        &self,
        request: &NewChangeRequest,
        token: Option<&str>,
    ) -> ApiResult<ChangeRequest> {
        self.inner.create(request, token).await
    }

    pub async fn create_with_files(
        &self,
        request: &NewChangeRequest,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<ChangeRequest> {
        self.inner
            .create_with_files(request.form_fields(), files, token)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        changes: &ChangeRequestUpdate,
        token: Option<&str>,
    ) -> ApiResult<ChangeRequest> {
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
impl HealthCheck for ChangeRequestClient {
    fn service_name(&self) -> &'static str {
        "change-requests"
    }

    async fn health(&self) -> ServiceHealth {
        self.inner.probe_health(self.service_name()).await
    }
}
