//! Standard errors used by all functions in the crate.

use crate::{types::ScalarError, webhooks::WebhookError};
use serde::Deserialize;
use std::fmt;

/// Error code returned when the debited wallet has insufficient funds.
pub const ERR_CODE_INSUFFICIENT_FUNDS: i64 = 15030;
/// Error code returned when a wrong PIN was entered.
pub const ERR_CODE_CARD_WRONG_PIN: i64 = 32056;
/// Error code returned when the card was declared lost.
pub const ERR_CODE_CARD_LOST: i64 = 32095;
/// Error code returned when the card was declared stolen.
pub const ERR_CODE_CARD_STOLEN: i64 = 32096;
/// Error code returned when the card is blocked.
pub const ERR_CODE_CARD_BLOCKED: i64 = 32111;

/// Error collecting all possible failures of the Treezor client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error while reading a response.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Treezor API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// A scalar field did not match any of its accepted wire representations.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
    /// The response body is not a valid `{ "<resource>": [...] }` envelope.
    #[error("Invalid `{resource}` envelope: {source}")]
    Envelope {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
    /// A single-resource operation did not receive exactly one item.
    ///
    /// This is an upstream contract violation, retrying will not help.
    #[error("API did not return exactly one item in `{resource}`: {count} returned")]
    UnexpectedItemCount { resource: String, count: usize },
    /// Webhook delivery could not be parsed, validated or dispatched.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

/// Treezor HTTP APIs error.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// All the errors listed in the response body.
    ///
    /// Empty if the body could not be decoded.
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiError {
    /// Returns `true` if any of the listed errors carries the given code.
    pub fn has_code(&self, code: i64) -> bool {
        self.errors.iter().any(|e| e.code == Some(code))
    }

    /// Builds an `ApiError` out of a failed response body.
    ///
    /// Undecodable bodies yield an error with an empty list rather than failing.
    pub(crate) fn from_body(status: u16, body: &[u8]) -> Self {
        let res: ErrorResponseBody = serde_json::from_slice(body).unwrap_or_default();

        let mut errors = res.errors;
        // The liveness endpoints answer with a bare `error` string
        if let Some(message) = res.error {
            errors.push(ApiErrorDetail {
                code: None,
                message,
                additional_information: Vec::new(),
            });
        }

        Self { status, errors }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Treezor HTTP error {}", self.status)?;

        for e in &self.errors {
            write!(f, "\n- {}", e)?;
        }

        Ok(())
    }
}

/// A single entry of a Treezor error response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorDetail {
    #[serde(rename = "errorCode")]
    pub code: Option<i64>,
    #[serde(rename = "errorMessage", default)]
    pub message: String,
    #[serde(rename = "additionalInformation", default)]
    pub additional_information: Vec<String>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} error caused because: {}", code, self.message)?,
            None => write!(f, "{}", self.message)?,
        }

        if !self.additional_information.is_empty() {
            write!(f, " ({})", self.additional_information.join(", "))?;
        }

        Ok(())
    }
}

/// Body of an error response from Treezor APIs.
#[derive(Deserialize, Debug, Default)]
struct ErrorResponseBody {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
    error: Option<String>,
}
