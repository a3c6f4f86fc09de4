//! Error taxonomy for SMHI API calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by request operations.
///
/// Each variant is a distinct outcome the caller can branch on. Nothing is
/// retried or swallowed internally.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum SmhiError {
    /// The relative path could not be resolved against the base URL.
    #[error("failed to resolve request path '{path}' against base URL")]
    MalformedUrl {
        /// Relative path as passed by the caller.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// Transport failure below HTTP (DNS, refused connection, reset).
    #[error("network request failed")]
    Network(#[source] reqwest::Error),

    /// The caller cancelled the call before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// The caller's deadline (or the configured transport timeout) elapsed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// The service answered with a non-2xx status.
    #[error("SMHI API error (HTTP {status})")]
    Http {
        /// Status code returned by the service.
        status: StatusCode,
    },

    /// A 2xx payload did not match the expected shape.
    #[error("failed to decode JSON response")]
    Decode(#[source] serde_json::Error),

    /// Writing a raw payload into the caller's sink failed.
    #[error("failed to write response body to sink")]
    Sink(#[source] std::io::Error),
}

impl SmhiError {
    /// Returns the HTTP status code for `Http` errors.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for HTTP 404, which the service uses for
    /// "no data for this station/period".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Classifies a `reqwest` send/read failure.
    ///
    /// Transport timeouts surface as `DeadlineExceeded` so a configured
    /// client timeout and a caller deadline look the same to the caller.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::DeadlineExceeded
        } else {
            Self::Network(err)
        }
    }
}
