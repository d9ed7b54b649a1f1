//! Error types for the accounts API client.
//!
//! # Design
//! Failures are kept in distinct, inspectable categories so callers can
//! pick a retry policy per category: `Connection` and `Server` are usually
//! worth retrying, `Client` never is. A 404 on fetch is not an error at all;
//! it surfaces as `Ok(None)` from `AccountClient::fetch_account`.

use thiserror::Error;

/// Boxed cause carried by `ApiError::Connection`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `AccountClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained, or its body could not be read.
    #[error("connection error: {0}")]
    Connection(#[source] BoxError),

    /// The server answered 3xx/4xx: the request was invalid or conflicting.
    #[error("client side error {status}: {message}")]
    Client { status: u16, message: String },

    /// The server answered 5xx.
    #[error("server side error {status}: {message}")]
    Server { status: u16, message: String },

    /// A status the operation has no rule for.
    #[error("unexpected status code {status}: {body}")]
    Unexpected { status: u16, body: String },

    /// A payload violated the wire contract. Not expected in normal
    /// operation and not meant to be handled.
    #[error("integrity error: {0}")]
    Integrity(String),
}

impl ApiError {
    pub fn is_connection(&self) -> bool {
        matches!(self, ApiError::Connection(_))
    }

    pub fn is_client(&self) -> bool {
        matches!(self, ApiError::Client { .. })
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }

    /// The HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Client { status, .. }
            | ApiError::Server { status, .. }
            | ApiError::Unexpected { status, .. } => Some(*status),
            ApiError::Connection(_) | ApiError::Integrity(_) => None,
        }
    }
}

/// Errors raised while resolving client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} variable must be set")]
    MissingBaseUrl { key: &'static str },
}
