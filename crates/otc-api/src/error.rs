//! API gateway error types.

use thiserror::Error;

/// Failures of a single remote call. None of them are retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection-level failure (timeout, DNS, reset).
    #[error("request to the work-order API failed: {0}")]
    TransportFailure(String),

    /// The API answered with a status other than 200/201.
    #[error("work-order API rejected the request ({status}): {payload}")]
    ServerRejected {
        /// HTTP status code.
        status: u16,
        /// Response body, parsed as JSON when possible, otherwise as a string.
        payload: serde_json::Value,
    },

    /// Anything else that went wrong during the call (bad JSON, bad headers).
    #[error("unexpected error calling the work-order API: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Classify a reqwest failure into transport vs. unexpected.
    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() || error.is_connect() || error.is_request() || error.is_body() {
            Self::TransportFailure(error.to_string())
        } else {
            Self::Unexpected(error.to_string())
        }
    }
}
