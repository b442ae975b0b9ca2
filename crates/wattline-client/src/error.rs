//! Error taxonomy for prediction service calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Guidance shown when the service could not be reached at all.
pub const UNREACHABLE_GUIDANCE: &str =
    "Backend not connected. Deploy the backend first or check the API URL configuration.";

/// Guidance shown when the service was reached but the call failed.
pub const FAILED_CALL_GUIDANCE: &str =
    "Unable to get prediction. Please check the backend connection.";

/// Errors from a single call to the prediction service.
///
/// Two failure kinds matter to callers: the server was never reached
/// ([`PredictError::Unreachable`]), or it was reached but the call failed
/// ([`PredictError::Status`] / [`PredictError::Body`]). The UI shows
/// different guidance for each kind.
#[derive(Error, Debug)]
pub enum PredictError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout).
    #[error("Could not reach server at {url}: {source}")]
    Unreachable {
        /// The endpoint that was attempted.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server responded with a non-success status. The body is not
    /// inspected.
    #[error("Server returned {status} for {url}")]
    Status {
        /// The endpoint that was attempted.
        url: String,
        /// The HTTP status code.
        status: StatusCode,
    },

    /// The server responded with a success status but the body could not
    /// be interpreted.
    #[error("Malformed response from {url}: {source}")]
    Body {
        /// The endpoint that was attempted.
        url: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl PredictError {
    /// Returns true for network-layer failures where no response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Returns the user-facing guidance text for this failure kind.
    #[must_use]
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => UNREACHABLE_GUIDANCE,
            Self::Status { .. } | Self::Body { .. } => FAILED_CALL_GUIDANCE,
        }
    }

    /// Returns the endpoint the failed attempt targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Unreachable { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => {
                url
            }
        }
    }
}
