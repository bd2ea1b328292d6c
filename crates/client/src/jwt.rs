//! Client-side decoding of the session token payload.
//!
//! The signature is never checked: the payload only feeds display fields.
use api_types::user::{TokenClaims, User};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use crate::error::{ClientError, Result};

pub fn decode_claims(token: &str) -> Result<TokenClaims> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(ClientError::InvalidToken("missing payload segment".to_string())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|err| ClientError::InvalidToken(format!("payload is not base64url: {err}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|err| ClientError::InvalidToken(format!("unexpected payload: {err}")))
}

pub fn decode_user(token: &str) -> Result<User> {
    decode_claims(token).map(User::from)
}
