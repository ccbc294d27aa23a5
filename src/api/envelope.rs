//! Response envelope shared by the governance backend services.
//!
//! Every service answers with `{success, data?, count?, error?}`. The
//! services disagree on plenty of details, but never on this wrapper;
//! normalization of everything inside `data` happens in the per-resource
//! record types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, ApiResult};

/// Top-level wrapper on every backend response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope invariant: when `success` is false, `data` must not be
    /// consumed. The backend's own error message is surfaced verbatim.
    pub fn ensure_success(&self) -> ApiResult<()> {
        if self.success {
            return Ok(());
        }
        Err(ApiError::Backend {
            status: None,
            message: self
                .error
                .clone()
                .unwrap_or_else(|| "request failed".to_string()),
        })
    }

    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> ApiResult<T> {
        self.ensure_success()?;
        self.data.ok_or_else(|| ApiError::UnexpectedFormat {
            detail: "successful envelope missing data".to_string(),
        })
    }

    /// Acknowledge a successful envelope whose payload is irrelevant
    /// (deletes, updates without a returned record).
    pub fn into_ack(self) -> ApiResult<()> {
        self.ensure_success()
    }
}

impl<T> ApiEnvelope<Vec<T>> {
    /// Unwrap a list payload. A successful list envelope with no data is
    /// an empty sequence, and the count falls back to the page length
    /// when the backend omits it.
    pub fn into_list(self) -> ApiResult<(Vec<T>, u64)> {
        self.ensure_success()?;
        let items = self.data.unwrap_or_default();
        let count = self.count.unwrap_or(items.len() as u64);
        Ok((items, count))
    }
}

/// Deserializer for sub-collection fields (attachments, payment terms).
///
/// The backends variously omit these fields, send `null`, or send a
/// scalar where a sequence belongs. All of those normalize to an empty
/// sequence; elements that fail to parse are dropped rather than
/// poisoning the record. Combine with `#[serde(default)]` so the absent
/// case normalizes too.
pub fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
