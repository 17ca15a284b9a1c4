//! Small records shared by several resources.

use serde::{Deserialize, Serialize};

use crate::pagination::NamedResource;

/// A localized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// The name in the given language.
    pub name: String,
    /// Language of this entry.
    pub language: NamedResource,
}

/// Flavor text from a specific game version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    /// The text itself.
    pub flavor_text: String,
    /// Language of this entry.
    pub language: NamedResource,
    /// Game version the text comes from (creatures and species).
    pub version: Option<NamedResource>,
    /// Version group the text comes from (abilities).
    pub version_group: Option<NamedResource>,
}

/// Index of a resource inside a particular game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameIndex {
    /// Internal game index.
    pub game_index: u32,
    /// Game version (for creatures).
    pub version: Option<NamedResource>,
    /// Generation (for types).
    pub generation: Option<NamedResource>,
}
