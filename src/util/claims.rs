//! Unverified JWT claim extraction for the stored bearer token.
//!
//! DESIGN
//! ======
//! The client never verifies the token signature — that is the API server's
//! job on every authenticated request. This module is strictly a shape/field
//! extractor: split the token, base64url-decode the payload segment, and
//! deserialize a closed claim struct. Anything that does not match yields an
//! explicit [`DecodeError`] the route guard can fail closed on, never a panic
//! and never a silently-empty claim set.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use thiserror::Error;

/// Decoded token claims as issued by the login endpoint.
///
/// `userId` and `exp` are required; the role flags default to `false` when a
/// token omits them, matching how the backend treats missing role fields.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(rename = "isDoctor", default)]
    pub is_doctor: bool,
    /// Expiry as seconds since the Unix epoch.
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    /// Whether the token's `exp` instant has passed.
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at <= now_unix
    }
}

/// Why a stored token could not be read as claims.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,
    #[error("token does not have three dot-separated segments")]
    MalformedStructure,
    #[error("payload segment is not valid base64url")]
    InvalidBase64,
    #[error("payload is not a valid claim document: {0}")]
    InvalidPayload(String),
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// Pure and infallible in the panic sense: every malformed input maps to a
/// [`DecodeError`] variant.
///
/// # Errors
///
/// Returns a [`DecodeError`] for empty input, a wrong segment count, invalid
/// base64url in the payload, or a payload that is not the expected claim
/// document shape.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DecodeError::MalformedStructure);
    };
    if payload.is_empty() {
        return Err(DecodeError::MalformedStructure);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::InvalidBase64)?;

    serde_json::from_slice(&bytes).map_err(|e| DecodeError::InvalidPayload(e.to_string()))
}
