//! Portfolio service client.

use async_trait::async_trait;
use url::Url;

use crate::api::health::{HealthCheck, ServiceHealth};
use crate::api::http::ServiceClient;
use crate::api::types::FileUpload;
use crate::auth::SessionGuard;
use crate::error::ApiResult;

use super::types::{
    NewPortfolioProject, PortfolioFilter, PortfolioProject, PortfolioProjectUpdate,
};

pub struct PortfolioClient {
    inner: ServiceClient,
}

impl PortfolioClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "portfolio-projects", session),
        }
    }

    pub async fn list(
        &self,
        filter: &PortfolioFilter,
        token: Option<&str>,
    ) -> ApiResult<(Vec<PortfolioProject>, u64)> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = &filter.category {
            query.push(("category", category.to_string()));
        }
        if let Some(year) = filter.year {
            query.push(("year", year.to_string()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        self.inner.list(&query, token).await
    }

    pub async fn get(&self, id: &str, token: Option<&str>) -> ApiResult<PortfolioProject> {
        self.inner.get_one(id, token).await
    }

    pub async fn create(
        &self,
        project: &NewPortfolioProject,
        token: Option<&str>,
    ) -> ApiResult<PortfolioProject> {
        self.inner.create(project, token).await
    }

    pub async fn create_with_files(
        &self,
        project: &NewPortfolioProject,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<PortfolioProject> {
        self.inner
            .create_with_files(project.form_fields(), files, token)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        changes: &PortfolioProjectUpdate,
        token: Option<&str>,
    ) -> ApiResult<PortfolioProject> {
        self.inner.update(id, changes, token).await
    }

    /// Update that also uploads new files; existing files are left
    /// untouched by the backend.
    pub async fn update_with_files(
        &self,
        id: &str,
        changes: &PortfolioProjectUpdate,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<PortfolioProject> {
        self.inner
            .update_with_files(id, changes.form_fields(), files, token)
            .await
    }

    pub async fn delete(&self, id: &str, token: Option<&str>) -> ApiResult<()> {
        self.inner.delete(id, token).await
    }

    pub async fn delete_many(&self, ids: &[String], token: Option<&str>) -> ApiResult<u64> {
        self.inner.delete_many(ids, token).await
    }
}

#[async_trait]
impl HealthCheck for PortfolioClient {
    fn service_name(&self) -> &'static str {
        "portfolio-projects"
    }

    async fn health(&self) -> ServiceHealth {
        self.inner.probe_health(self.service_name()).await
    }
}
