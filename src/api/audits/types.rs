//! Audit service records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit engagement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditType {
    Internal,
    External,
    Compliance,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for AuditType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal => write!(f, "INTERNAL"),
            Self::External => write!(f, "EXTERNAL"),
            Self::Compliance => write!(f, "COMPLIANCE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Audit engagement lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planned => write!(f, "PLANNED"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One audit engagement as the audit service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "auditType", alias = "audit_type")]
    pub audit_type: AuditType,
    pub status: AuditStatus,
    #[serde(default)]
    pub division: String,
    #[serde(rename = "findingsCount", alias = "findings_count", default)]
    pub findings_count: u32,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an audit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAudit {
    pub title: String,
    pub description: String,
    pub audit_type: AuditType,
    pub status: AuditStatus,
    pub division: String,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_type: Option<AuditType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuditStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings_count: Option<u32>,
}

/// Client-side list filters. Only provided values become query
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub status: Option<AuditStatus>,
    pub audit_type: Option<AuditType>,
    pub division: Option<String>,
    pub search: Option<String>,
}
