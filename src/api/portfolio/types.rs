//! Portfolio service records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::envelope::lenient_seq;
use crate::api::types::FileAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortfolioCategory {
    WebApplication,
    MobileApplication,
    Infrastructure,
    DataPlatform,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WebApplication => write!(f, "WEB_APPLICATION"),
            Self::MobileApplication => write!(f, "MOBILE_APPLICATION"),
            Self::Infrastructure => write!(f, "INFRASTRUCTURE"),
            Self::DataPlatform => write!(f, "DATA_PLATFORM"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: PortfolioCategory,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub files: Vec<FileAttachment>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioProject {
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub technologies: Vec<String>,
}

impl NewPortfolioProject {
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("category", self.category.to_string()),
            (
                "technologies",
                serde_json::to_string(&self.technologies).unwrap_or_else(|_| "[]".to_string()),
            ),
        ];
        if let Some(year) = self.year {
            fields.push(("year", year.to_string()));
        }
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PortfolioCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

impl PortfolioProjectUpdate {
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(title) = &self.title {
            fields.push(("title", title.clone()));
        }
        if let Some(description) = &self.description {
            fields.push(("description", description.clone()));
        }
        if let Some(category) = &self.category {
            fields.push(("category", category.to_string()));
        }
        if let Some(year) = self.year {
            fields.push(("year", year.to_string()));
        }
        if let Some(technologies) = &self.technologies {
            fields.push((
                "technologies",
                serde_json::to_string(technologies).unwrap_or_else(|_| "[]".to_string()),
            ));
        }
        fields
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioFilter {
    pub category: Option<PortfolioCategory>,
    pub year: Option<i32>,
    pub search: Option<String>,
}
