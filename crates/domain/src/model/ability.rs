//! `/ability/{id}` records.

use serde::{Deserialize, Serialize};

use super::common::{FlavorText, Name};
use crate::pagination::NamedResource;

/// An ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Numeric identifier.
    pub id: u32,
    /// Resource name.
    pub name: String,
    /// Whether it originates in the main game series.
    pub is_main_series: bool,
    /// Generation that introduced it.
    pub generation: NamedResource,
    /// Localized names.
    pub names: Vec<Name>,
    /// Localized effect descriptions.
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    /// Effect changes across version groups.
    #[serde(default)]
    pub effect_changes: Vec<EffectChange>,
    /// Flavor text per version group.
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    /// Creatures that can have it.
    pub pokemon: Vec<AbilityPokemon>,
}

/// Localized effect description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEntry {
    /// Full effect text.
    pub effect: String,
    /// Short effect text (absent on effect changes).
    pub short_effect: Option<String>,
    /// Language.
    pub language: NamedResource,
}

/// Effect text that applied to an earlier version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectChange {
    /// Version group.
    pub version_group: NamedResource,
    /// Effect texts.
    pub effect_entries: Vec<EffectEntry>,
}

/// A creature that can have an ability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityPokemon {
    /// Whether the ability is hidden on this creature.
    pub is_hidden: bool,
    /// Slot number.
    pub slot: u32,
    /// The creature.
    pub pokemon: NamedResource,
}
