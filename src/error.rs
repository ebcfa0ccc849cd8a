/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the ServiceTrade client
//!
//! Every fallible operation in the crate returns [`AppError`]. Only authorization
//! failures (401/403) are recovered internally, by one re-login and resend; every
//! other error reaches the caller unchanged.

use reqwest::StatusCode;
use std::fmt;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Credentials are missing or ambiguous
    Configuration(String),
    /// The `/auth` endpoint rejected the login or answered with a malformed envelope
    Authentication(String),
    /// Any non-2xx business response
    Api {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Connection refused, timeout or any other transport-level failure
    Network(reqwest::Error),
    /// The response body is not valid JSON
    Decode(serde_json::Error),
    /// Well-formed JSON that does not follow the `{ "data": ... }` envelope
    Protocol(String),
    /// An argument was rejected before any request was made
    InvalidArgument(String),
}

impl AppError {
    /// Returns the HTTP status carried by an [`AppError::Api`] error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Checks whether the error is an authorization failure (401 or 403)
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AppError::Api {
                status: StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN,
                ..
            }
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::Authentication(msg) => write!(f, "authentication error: {msg}"),
            AppError::Api { status, body } => write!(f, "api error {status}: {body}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Decode(e) => write!(f, "decode error: {e}"),
            AppError::Protocol(msg) => write!(f, "protocol error: {msg}"),
            AppError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e)
    }
}
