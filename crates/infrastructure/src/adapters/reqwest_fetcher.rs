//! HTTP fetcher implementation using reqwest.
//!
//! This adapter implements the `HttpFetcher` port using the reqwest library.
//! It handles all HTTP communication with the upstream API.

use std::future::Future;

use pokedex_application::ports::{FetchError, HttpFetcher, RawResponse};
use pokedex_domain::ApiSettings;
use reqwest::{Client, Url};

/// Maximum number of redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// HTTP fetcher implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpFetcher` port from the
/// application layer. No timeout is configured and nothing is retried.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Creates a new fetcher from the API settings.
    ///
    /// Configuration:
    /// - User-Agent: from the settings
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &ApiSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new fetcher with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Maps reqwest errors to the port's `FetchError`.
    fn map_error(error: &reqwest::Error) -> FetchError {
        if error.is_connect() {
            return FetchError::ConnectionFailed(error.to_string());
        }

        if error.is_redirect() {
            return FetchError::Other(format!("too many redirects (max {MAX_REDIRECTS})"));
        }

        FetchError::Other(error.to_string())
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, FetchError>> + Send {
        let url = url.to_string();

        async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| FetchError::InvalidUrl(format!("{e}: {url}")))?;

            let response = self
                .client
                .get(parsed_url)
                .send()
                .await
                .map_err(|e| Self::map_error(&e))?;

            let status = response.status();
            let reason = status.canonical_reason().unwrap_or("Unknown Status");

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Other(format!("failed to read body: {e}")))?;

            Ok(RawResponse::new(status.as_u16(), reason, body.to_vec()))
        }
    }
}
