//! Errors surfaced by the client core.
//!
//! API failures carry the server's message so call sites can show it as-is.
//! [`SessionExpired`] is special: by the time it is returned the stored token
//! has already been removed and the navigator sent to the login page.
//!
//!  [`SessionExpired`]: ClientError::SessionExpired
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Session expired. Please login again.")]
    SessionExpired,
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("server unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected empty response")]
    EmptyResponse,
    #[error("invalid session token: {0}")]
    InvalidToken(String),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("token storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("token storage is corrupt: {0}")]
    StorageFormat(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}
