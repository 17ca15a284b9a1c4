//! Upstream resource categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A category of upstream entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// An individual creature (`/pokemon`).
    Pokemon,
    /// An elemental type (`/type`).
    Type,
    /// A species descriptor (`/pokemon-species`).
    Species,
    /// A game generation (`/generation`).
    Generation,
    /// An ability (`/ability`).
    Ability,
}

impl ResourceKind {
    /// URL path segment under the API base address.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Type => "type",
            Self::Species => "pokemon-species",
            Self::Generation => "generation",
            Self::Ability => "ability",
        }
    }

    /// Human-readable noun used in error messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Pokemon => "Pokémon",
            Self::Type => "Pokémon type",
            Self::Species => "Pokémon species",
            Self::Generation => "Pokémon generation",
            Self::Ability => "ability",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
