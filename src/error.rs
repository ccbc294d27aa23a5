//! Error taxonomy for the dashboard client core.
//!
//! Every API client operation resolves to either a successful value or
//! exactly one of these variants, carrying the best available
//! human-readable detail. Token decode failures are deliberately absent:
//! the session guard expresses them as "no session", never as an error.

use thiserror::Error;

/// Result alias used across the API clients.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure surfaced by an API client operation.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 401. The session is invalid or expired; stored credentials
    /// are cleared and the user must log in again.
    #[error("authentication failed: {detail}")]
    AuthenticationFailed { detail: String },

    /// HTTP 403. The session is valid but lacks privilege. No storage
    /// mutation happens on this path.
    #[error("access denied: {detail}")]
    AccessDenied { detail: String },

    /// HTTP 404. Requested record or endpoint absent.
    #[error("not found: {detail}")]
    NotFound { detail: String },

    /// HTTP 5xx. Surfaced as a generic retry-later message.
    #[error("server error (HTTP {status}), please try again later")]
    ServerError { status: u16 },

    /// Transport-level failure (DNS, connection refused, timeout).
    /// Distinct from any HTTP error response.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-JSON body where JSON was expected, or a JSON body that does
    /// not match the envelope contract.
    #[error("unexpected response format: {detail}")]
    UnexpectedFormat { detail: String },

    /// Failure reported by the backend itself, either through a
    /// non-success status outside the mapped codes (e.g. 400) or through
    /// an envelope with `success: false`. The message is the backend's
    /// own wording when present.
    #[error("{message}")]
    Backend { status: Option<u16>, message: String },

    /// Caller-side input the client refuses to send (missing id,
    /// malformed attachment content type).
    #[error("invalid request: {detail}")]
    InvalidRequest { detail: String },
}

impl ApiError {
    /// Maps a non-success HTTP status to its taxonomy variant. `detail`
    /// is the message extracted from the error body when one was present.
    pub(crate) fn from_status(status: reqwest::StatusCode, detail: Option<String>) -> Self {
        let code = status.as_u16();
        match code {
            401 => ApiError::AuthenticationFailed {
                detail: detail.unwrap_or_else(|| "session invalid or expired".to_string()),
            },
            403 => ApiError::AccessDenied {
                detail: detail.unwrap_or_else(|| "insufficient privilege".to_string()),
            },
            404 => ApiError::NotFound {
                detail: detail.unwrap_or_else(|| format!("HTTP status {code}")),
            },
            500..=599 => ApiError::ServerError { status: code },
            _ => ApiError::Backend {
                status: Some(code),
                message: detail.unwrap_or_else(|| format!("HTTP status {code}")),
            },
        }
    }

    /// True for the 401 path, which obliges the caller to re-login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::AuthenticationFailed { .. })
    }
}
