//! Status-code classification shared by every operation.
//!
//! # Design
//! All operations funnel their response through `classify`. The only thing
//! that differs between them is a `StatusPolicy`: which codes count as
//! success, and whether 404 means "absent" instead of a client error. Fetch
//! is the only operation that treats 404 as absence; delete deliberately
//! reports it as an ordinary `Client` error.

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Which statuses an operation accepts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCodes {
    AnyTwoHundred,
    Exactly(u16),
}

impl SuccessCodes {
    fn accepts(self, status: u16) -> bool {
        match self {
            SuccessCodes::AnyTwoHundred => (200..300).contains(&status),
            SuccessCodes::Exactly(expected) => status == expected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPolicy {
    pub success: SuccessCodes,
    pub not_found_is_absent: bool,
}

impl StatusPolicy {
    pub const CREATE: StatusPolicy = StatusPolicy {
        success: SuccessCodes::AnyTwoHundred,
        not_found_is_absent: false,
    };

    pub const FETCH: StatusPolicy = StatusPolicy {
        success: SuccessCodes::Exactly(200),
        not_found_is_absent: true,
    };

    pub const DELETE: StatusPolicy = StatusPolicy {
        success: SuccessCodes::AnyTwoHundred,
        not_found_is_absent: false,
    };
}

/// Tagged result of classifying one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    NotFound,
    ClientError { status: u16, message: String },
    ServerError { status: u16, message: String },
    Unexpected { status: u16, body: String },
}

pub fn classify(policy: StatusPolicy, response: HttpResponse) -> Outcome {
    let HttpResponse { status, body, .. } = response;
    match status {
        s if policy.success.accepts(s) => Outcome::Success(body),
        404 if policy.not_found_is_absent => Outcome::NotFound,
        300..=499 => Outcome::ClientError {
            status,
            message: body,
        },
        500..=u16::MAX => Outcome::ServerError {
            status,
            message: body,
        },
        _ => Outcome::Unexpected { status, body },
    }
}

impl Outcome {
    /// Fold the outcome into a `Result`: `Some(body)` on success, `None` for
    /// an absent resource, and the matching `ApiError` otherwise.
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        match self {
            Outcome::Success(body) => Ok(Some(body)),
            Outcome::NotFound => Ok(None),
            Outcome::ClientError { status, message } => Err(ApiError::Client { status, message }),
            Outcome::ServerError { status, message } => Err(ApiError::Server { status, message }),
            Outcome::Unexpected { status, body } => Err(ApiError::Unexpected { status, body }),
        }
    }
}
