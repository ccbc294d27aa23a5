//! Shared HTTP plumbing behind every resource client.
//!
//! One `ServiceClient` is instantiated per backend resource with that
//! resource's base URL and path. It attaches the bearer credential,
//! sends JSON or multipart bodies, and funnels every response through
//! the same normalization pipeline: transport failures, status-mapped
//! errors, content-type checks, then the envelope contract.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{multipart, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::auth::SessionGuard;
use crate::error::{ApiError, ApiResult};

use super::envelope::ApiEnvelope;
use super::health::{ServiceHealth, HEALTH_TIMEOUT};
use super::types::FileUpload;

/// Multipart field name every file is appended under.
pub(crate) const FILE_FIELD: &str = "files";

/// Generic client for one backend resource.
#[derive(Clone)]
pub struct ServiceClient {
    http: Client,
    base: String,
    resource: &'static str,
    session: SessionGuard,
}

impl ServiceClient {
    /// No client-level timeout here: resource calls run until the
    /// transport gives up. The health probe is the one exception.
    pub fn new(base: &Url, resource: &'static str, session: SessionGuard) -> Self {
        Self {
            http: Client::new(),
            base: base.as_str().trim_end_matches('/').to_string(),
            resource,
            session,
        }
    }

    pub(crate) fn session(&self) -> &SessionGuard {
        &self.session
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/api/{}", self.base, self.resource)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Bearer value for one request. An explicit caller-supplied token
    /// wins; otherwise the guard's stored token. With neither, the
    /// request still fires with an empty credential and the backend
    /// performs the rejection.
    fn bearer(&self, explicit: Option<&str>) -> String {
        let token = explicit
            .map(str::to_string)
            .or_else(|| self.session.get_valid_token())
            .unwrap_or_default();
        format!("Bearer {token}")
    }

    fn request(&self, method: Method, url: &str, token: Option<&str>) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(AUTHORIZATION, self.bearer(token))
    }

    /// Response normalization shared by every operation.
    async fn read_envelope<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<ApiEnvelope<T>> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, resource = self.resource, "backend returned error status");
            if status == StatusCode::UNAUTHORIZED {
                // A 401 invalidates the stored session.
                self.session.clear_auth_data();
            }
            return Err(ApiError::from_status(status, extract_error_message(&body)));
        }

        if !content_type.contains("json") {
            return Err(ApiError::UnexpectedFormat {
                detail: snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|err| ApiError::UnexpectedFormat {
            detail: format!("{err}; body: {}", snippet(&body)),
        })
    }

    pub async fn list<T: DeserializeOwned>(
        &self,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> ApiResult<(Vec<T>, u64)> {
        let url = self.collection_url();
        debug!(%url, params = query.len(), "list");
        let response = self
            .request(Method::GET, &url, token)
            .query(query)
            .send()
            .await?;
        self.read_envelope(response).await?.into_list()
    }

    pub async fn get_one<T: DeserializeOwned>(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> ApiResult<T> {
        let id = require_id(id)?;
        let response = self
            .request(Method::GET, &self.record_url(id), token)
            .send()
            .await?;
        self.read_envelope(response).await?.into_data()
    }

    pub async fn create<T, B>(&self, body: &B, token: Option<&str>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, &self.collection_url(), token)
            .json(body)
            .send()
            .await?;
        self.read_envelope(response).await?.into_data()
    }

    pub async fn update<T, B>(&self, id: &str, body: &B, token: Option<&str>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let id = require_id(id)?;
        let response = self
            .request(Method::PUT, &self.record_url(id), token)
            .json(body)
            .send()
            .await?;
        self.read_envelope(response).await?.into_data()
    }

    /// Multipart create: scalar fields as individual form fields, every
    /// file under the shared `files` field. The multipart content type
    /// (and boundary) is left to the transport.
    pub async fn create_with_files<T: DeserializeOwned>(
        &self,
        fields: Vec<(&'static str, String)>,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<T> {
        let form = build_form(fields, files)?;
        let response = self
            .request(Method::POST, &self.collection_url(), token)
            .multipart(form)
            .send()
            .await?;
        self.read_envelope(response).await?.into_data()
    }

    pub async fn update_with_files<T: DeserializeOwned>(
        &self,
        id: &str,
        fields: Vec<(&'static str, String)>,
        files: Vec<FileUpload>,
        token: Option<&str>,
    ) -> ApiResult<T> {
        let id = require_id(id)?;
        let form = build_form(fields, files)?;
        let response = self
            .request(Method::PUT, &self.record_url(id), token)
            .multipart(form)
            .send()
            .await?;
        self.read_envelope(response).await?.into_data()
    }

    /// Delete mutates exactly the one record identified by `id`.
    pub async fn delete(&self, id: &str, token: Option<&str>) -> ApiResult<()> {
        let id = require_id(id)?;
        let response = self
            .request(Method::DELETE, &self.record_url(id), token)
            .send()
            .await?;
        self.read_envelope::<serde_json::Value>(response)
            .await?
            .into_ack()
    }

    /// Bulk delete. The returned count is the number of records the
    /// backend actually removed, which may be less than `ids.len()`
    /// (already-deleted ids are skipped server-side).
    pub async fn delete_many(&self, ids: &[String], token: Option<&str>) -> ApiResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let url = format!("{}/delete-multiple", self.collection_url());
        let response = self
            .request(Method::POST, &url, token)
            .json(&serde_json::json!({ "ids": ids }))
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = self.read_envelope(response).await?;
        envelope.ensure_success()?;
        Ok(envelope.count.unwrap_or(0))
    }

    /// POST to an endpoint outside the resource CRUD shape (login,
    /// registration).
    pub(crate) async fn post_at<T, B>(
        &self,
        url: &str,
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, url, token)
            .json(body)
            .send()
            .await?;
        self.read_envelope(response).await?.into_data()
    }

    /// Health probe, the sole operation with a client-enforced timeout.
    pub(crate) async fn probe_health(&self, service: &'static str) -> ServiceHealth {
        let url = format!("{}/api/health", self.base);
        match self.http.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(response) if response.status().is_success() => ServiceHealth::up(service),
            Ok(response) => ServiceHealth::down(
                service,
                format!("HTTP status {}", response.status().as_u16()),
            ),
            Err(err) => ServiceHealth::down(service, format!("unreachable: {err}")),
        }
    }
}

fn require_id(id: &str) -> ApiResult<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidRequest {
            detail: "record id must be present".to_string(),
        });
    }
    Ok(trimmed)
}

fn build_form(
    fields: Vec<(&'static str, String)>,
    files: Vec<FileUpload>,
) -> ApiResult<multipart::Form> {
    let mut form = multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    for file in files {
        let FileUpload {
            file_name,
            content_type,
            bytes,
        } = file;
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let part = if content_type.is_empty() {
            part
        } else {
            part.mime_str(&content_type)
                .map_err(|err| ApiError::InvalidRequest {
                    detail: format!("invalid attachment content type {content_type}: {err}"),
                })?
        };
        form = form.part(FILE_FIELD, part);
    }
    Ok(form)
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

fn snippet(body: &str) -> String {
    body.chars().take(200).collect()
}
