//! API client settings.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Base address of the public API.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Settings shared by every fetch the client performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base address, without trailing slash.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ApiSettings {
    /// Creates settings pointing at the given base address.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the address does not parse or
    /// is not `http`/`https`.
    pub fn new(base_url: &str) -> DomainResult<Self> {
        Self::default().with_base_url(base_url)
    }

    /// Replaces the base address (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the address does not parse or
    /// is not `http`/`https`.
    pub fn with_base_url(mut self, base_url: &str) -> DomainResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}': {base_url}",
                parsed.scheme()
            )));
        }

        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Replaces the user agent (builder pattern).
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
