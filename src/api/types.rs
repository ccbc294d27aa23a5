//! Types shared across the resource clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored file reference as the backends return it on records with
/// attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub id: String,
    #[serde(rename = "fileName", alias = "file_name")]
    pub file_name: String,
    pub url: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "uploadedAt", alias = "uploaded_at", default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// An in-memory file to submit with a multipart create or update.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    /// MIME type, e.g. `application/pdf`. Empty leaves the part untyped.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}
