//! Finance service records.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::envelope::lenient_seq;
use crate::api::types::FileAttachment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinanceStatus {
    Draft,
    Active,
    Invoiced,
    Closed,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for FinanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Invoiced => write!(f, "INVOICED"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One installment of a project's payment schedule. Order matters: the
/// backend returns terms in schedule order and the client preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    pub amount: Decimal,
    #[serde(rename = "dueDate", alias = "due_date", default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub paid: bool,
}

/// One finance project as the finance service returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceProject {
    pub id: String,
    pub name: String,
    #[serde(rename = "clientName", alias = "client_name", default)]
    pub client_name: String,
    #[serde(rename = "contractValue", alias = "contract_value")]
    pub contract_value: Decimal,
    pub status: FinanceStatus,
    /// Wire name kept from the legacy backend contract.
    #[serde(
        rename = "terminPembayaran",
        default,
        deserialize_with = "lenient_seq"
    )]
    pub payment_terms: Vec<PaymentTerm>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub attachments: Vec<FileAttachment>,
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinanceProject {
    pub name: String,
    pub client_name: String,
    pub contract_value: Decimal,
    pub status: FinanceStatus,
    #[serde(rename = "terminPembayaran")]
    pub payment_terms: Vec<PaymentTerm>,
}

impl NewFinanceProject {
    /// Multipart rendition: scalars as form fields, the payment-term
    /// sequence JSON-encoded into a single field.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("clientName", self.client_name.clone()),
            ("contractValue", self.contract_value.to_string()),
            ("status", self.status.to_string()),
            (
                "terminPembayaran",
                serde_json::to_string(&self.payment_terms).unwrap_or_else(|_| "[]".to_string()),
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FinanceStatus>,
    #[serde(rename = "terminPembayaran", skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<Vec<PaymentTerm>>,
}

#[derive(Debug, Clone, Default)]
pub struct FinanceFilter {
    pub status: Option<FinanceStatus>,
    pub search: Option<String>,
}
