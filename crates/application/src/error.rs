//! Application error types

use pokedex_domain::DomainError;
use thiserror::Error;

use crate::ports::FetchError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The API answered with a non-success status.
    #[error("failed to fetch {target}: {reason}")]
    Status {
        /// What was being fetched (resource key or URL).
        target: String,
        /// HTTP status code.
        status: u16,
        /// HTTP status text.
        reason: String,
    },

    /// The request did not produce a response.
    #[error("failed to fetch {target}: {source}")]
    Transport {
        /// What was being fetched (resource key or URL).
        target: String,
        /// Underlying transport failure.
        #[source]
        source: FetchError,
    },

    /// The response body is not valid JSON for the expected shape.
    #[error("failed to decode {target}: {source}")]
    Decode {
        /// What was being fetched (resource key or URL).
        target: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Query parameters could not be encoded.
    #[error("failed to encode query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl ApplicationError {
    /// HTTP status code, for status failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
