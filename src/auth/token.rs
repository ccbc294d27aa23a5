//! Bearer token decoding and expiry checks.
//!
//! Tokens are opaque three-segment strings; only the middle segment is
//! inspected, as an unpadded URL-safe base64 JSON payload. Nothing here
//! verifies the signature segment - that is the backend's job. The
//! client only needs to know whether the token is worth sending.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::types::TokenClaims;

/// Decode the claims payload of a bearer token.
///
/// Returns `None` unless the token has exactly three dot-separated
/// segments and the middle segment decodes and parses. Never panics and
/// never returns an error: a malformed token is simply "no session".
pub fn decode_token(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(segments[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}

/// Whether a token should be treated as expired.
///
/// Fails closed: a token that cannot be decoded is expired, and a token
/// whose `expiresAt` is at or before the current wall-clock second is
/// expired.
pub fn is_token_expired(token: &str) -> bool {
    match decode_token(token) {
        Some(claims) => claims.expires_at <= chrono::Utc::now().timestamp(),
        None => true,
    }
}
