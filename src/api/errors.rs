/// Errors from the upstream REST API layer.
use thiserror::Error;

/// Typed errors from a single HTTP exchange with the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status other than 200.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Raw HTTP status code.
        status: u16,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Malformed response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of a `Status` error, if that is what this is.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}
