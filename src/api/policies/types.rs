//! Policy service records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::envelope::lenient_seq;
use crate::api::types::FileAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyCategory {
    Governance,
    Security,
    HumanResources,
    Finance,
    Operational,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Governance => write!(f, "GOVERNANCE"),
            Self::Security => write!(f, "SECURITY"),
            Self::HumanResources => write!(f, "HUMAN_RESOURCES"),
            Self::Finance => write!(f, "FINANCE"),
            Self::Operational => write!(f, "OPERATIONAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One policy document as the policy service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub category: PolicyCategory,
    #[serde(rename = "effectiveDate", alias = "effective_date", default)]
    pub effective_date: Option<NaiveDate>,
    #[serde(default)]
    pub revision: u32,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub attachments: Vec<FileAttachment>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPolicy {
    pub title: String,
    pub summary: String,
    pub category: PolicyCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl NewPolicy {
    /// Scalar fields of the multipart submission; files travel
    /// separately under the shared `files` field.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("summary", self.summary.clone()),
            ("category", self.category.to_string()),
        ];
        if let Some(date) = self.effective_date {
            fields.push(("effectiveDate", date.to_string()));
        }
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PolicyCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct PolicyFilter {
    pub category: Option<PolicyCategory>,
    pub search: Option<String>,
}
