//! `/pokemon-species/{id}` records.

use serde::{Deserialize, Serialize};

use super::common::{FlavorText, Name};
use crate::pagination::NamedResource;

/// A species descriptor shared by all forms of a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Numeric identifier.
    pub id: u32,
    /// Resource name.
    pub name: String,
    /// Sort order.
    pub order: i32,
    /// Chance of being female in eighths, or -1 when genderless.
    pub gender_rate: i32,
    /// Base capture rate.
    pub capture_rate: u32,
    /// Base happiness when caught (null for some species).
    pub base_happiness: Option<u32>,
    /// Whether it is a baby.
    pub is_baby: bool,
    /// Whether it is legendary.
    pub is_legendary: bool,
    /// Whether it is mythical.
    pub is_mythical: bool,
    /// Egg cycles needed to hatch (null for some species).
    pub hatch_counter: Option<u32>,
    /// Whether it has visual gender differences.
    pub has_gender_differences: bool,
    /// Whether its forms can be switched.
    pub forms_switchable: bool,
    /// Growth rate.
    pub growth_rate: NamedResource,
    /// Pokédex entry numbers.
    pub pokedex_numbers: Vec<PokedexNumber>,
    /// Egg groups.
    pub egg_groups: Vec<NamedResource>,
    /// Color.
    pub color: NamedResource,
    /// Shape.
    pub shape: Option<NamedResource>,
    /// Species it evolves from.
    pub evolves_from_species: Option<NamedResource>,
    /// Evolution chain.
    pub evolution_chain: Option<EvolutionChainLink>,
    /// Habitat.
    pub habitat: Option<NamedResource>,
    /// Generation that introduced it.
    pub generation: NamedResource,
    /// Localized names.
    pub names: Vec<Name>,
    /// Pal Park encounters.
    #[serde(default)]
    pub pal_park_encounters: Vec<PalParkEncounter>,
    /// Flavor text per version.
    pub flavor_text_entries: Vec<FlavorText>,
    /// Localized form descriptions.
    #[serde(default)]
    pub form_descriptions: Vec<Description>,
    /// Localized genus names.
    pub genera: Vec<Genus>,
    /// Creatures belonging to this species.
    pub varieties: Vec<Variety>,
}

/// Link to an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainLink {
    /// URL of the chain.
    pub url: String,
}

/// Entry number in a Pokédex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexNumber {
    /// Entry number.
    pub entry_number: u32,
    /// The Pokédex.
    pub pokedex: NamedResource,
}

/// Pal Park encounter data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalParkEncounter {
    /// Base score.
    pub base_score: u32,
    /// Encounter rate.
    pub rate: u32,
    /// Pal Park area.
    pub area: NamedResource,
}

/// Localized description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// The text.
    pub description: String,
    /// Language.
    pub language: NamedResource,
}

/// Localized genus (e.g. "Mouse Pokémon").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    /// The genus.
    pub genus: String,
    /// Language.
    pub language: NamedResource,
}

/// A creature belonging to a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variety {
    /// Whether this is the default variety.
    pub is_default: bool,
    /// The creature.
    pub pokemon: NamedResource,
}
