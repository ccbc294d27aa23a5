//! Memo service client.

use async_trait::async_trait;
use url::Url;

use crate::api::health::{HealthCheck, ServiceHealth};
use crate::api::http::ServiceClient;
use crate::api::types::FileUpload;
use crate::auth::SessionGuard;
use crate::error::ApiResult;

use super::types::{Memo, MemoFilter, MemoUpdate, NewMemo};

pub struct MemoClient {
    inner: ServiceClient,
}

impl MemoClient {
    pub fn new(base: &Url, session: SessionGuard) -> Self {
        Self {
            inner: ServiceClient::new(base, "memos", session),
        }
    }

    pub async fn list(
        &self,
        filter: &MemoFilter,
        token: Option<&str>,
    ) -> ApiResult<(Vec<Memo>, u64)> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(division) = filter.division.as_deref().filter(|d| !d.is_empty()) {
            query.push(("toDivision", division.to_string()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        self.inner.list(&query, token).await
    }

    pub async fn get(&self, id: &str, token: Option<&str>) -> ApiResult<Memo> {
        self.inner.get_one(id, token).await
    }

    pub async fn create(&self, memo: &NewMemo, token: Option<&str>) -> ApiResult<Memo> {
        self.inner.create(memo, token).await
    }

    pub async fn create_with_files(
        &self,
        memo: &NewMemo,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<Memo> {
        self.inner
            .create_with_files(memo.form_fields(), files, token)
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        changes: &MemoUpdate,
        token: Option<&str>,
    ) -> ApiResult<Memo> {
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
impl HealthCheck for MemoClient {
    fn service_name(&self) -> &'static str {
        "memos"
    }

    async fn health(&self) -> ServiceHealth {
        self.inner.probe_health(self.service_name()).await
    }
}
