//! Change request service records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::envelope::lenient_seq;
use crate::api::types::FileAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeRequestStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ChangeRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Submitted => write!(f, "SUBMITTED"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ChangeRequestStatus,
    #[serde(rename = "requestedBy", alias = "requested_by", default)]
    pub requested_by: String,
    #[serde(default)]
    pub division: String,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub attachments: Vec<FileAttachment>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChangeRequest {
    pub title: String,
    pub description: String,
    /// New requests normally start as [`ChangeRequestStatus::Draft`].
    pub status: ChangeRequestStatus,
    pub requested_by: String,
    pub division: String,
}

impl NewChangeRequest {
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("status", self.status.to_string()),
            ("requestedBy", self.requested_by.clone()),
            ("division", self.division.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChangeRequestStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ChangeRequestFilter {
    pub status: Option<ChangeRequestStatus>,
    pub division: Option<String>,
    pub search: Option<String>,
}
