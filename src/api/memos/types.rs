//! Memo service records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::envelope::lenient_seq;
use crate::api::types::FileAttachment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memo {
    pub id: String,
    #[serde(rename = "memoNumber", alias = "memo_number", default)]
    pub memo_number: String,
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "fromDivision", alias = "from_division", default)]
    pub from_division: String,
    #[serde(rename = "toDivision", alias = "to_division", default)]
    pub to_division: String,
    #[serde(rename = "issuedDate", alias = "issued_date", default)]
    pub issued_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub attachments: Vec<FileAttachment>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMemo {
    pub memo_number: String,
    pub subject: String,
    pub body: String,
    pub from_division: String,
    pub to_division: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<NaiveDate>,
}

impl NewMemo {
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("memoNumber", self.memo_number.clone()),
            ("subject", self.subject.clone()),
            ("body", self.body.clone()),
            ("fromDivision", self.from_division.clone()),
            ("toDivision", self.to_division.clone()),
        ];
        if let Some(date) = self.issued_date {
            fields.push(("issuedDate", date.to_string()));
        }
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoFilter {
    pub division: Option<String>,
    pub search: Option<String>,
}
