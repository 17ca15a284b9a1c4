//! Identifier used to address a single upstream entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A resource is addressed either by its numeric id or by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceKey {
    /// Numeric identifier (e.g. `25`).
    Id(u32),
    /// Lowercase resource name (e.g. `pikachu`).
    Name(String),
}

impl ResourceKey {
    /// Parses a key, treating all-digit input as an id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidResourceKey`] when the input is blank or
    /// contains a `/`, which would escape the resource path.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(DomainError::InvalidResourceKey(input.to_string()));
        }

        Ok(trimmed
            .parse::<u32>()
            .map_or_else(|_| Self::Name(trimmed.to_string()), Self::Id))
    }

    /// Returns the numeric id, if this key is one.
    #[must_use]
    pub const fn as_id(&self) -> Option<u32> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl FromStr for ResourceKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u32> for ResourceKey {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ResourceKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
