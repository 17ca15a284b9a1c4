//! HTTP fetch port

use std::future::Future;

use thiserror::Error;

/// Raw response of a GET request, before any status or body handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// HTTP status text (canonical reason phrase).
    pub reason: String,
    /// Response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Returns true for any 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failures that prevent a response from being received at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for performing HTTP GET requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
/// One call is one network round trip: no retries, no caching.
pub trait HttpFetcher: Send + Sync {
    /// Performs a GET request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received; non-2xx
    /// statuses are returned as a normal [`RawResponse`].
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}
