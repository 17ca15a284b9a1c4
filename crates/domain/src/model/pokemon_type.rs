//! `/type/{id}` records.

use serde::{Deserialize, Serialize};

use super::common::{GameIndex, Name};
use crate::pagination::NamedResource;

/// An elemental type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Numeric identifier.
    pub id: u32,
    /// Resource name.
    pub name: String,
    /// Current damage relations.
    pub damage_relations: DamageRelations,
    /// Damage relations of earlier generations.
    #[serde(default)]
    pub past_damage_relations: Vec<PastDamageRelations>,
    /// Game indices per generation.
    pub game_indices: Vec<GameIndex>,
    /// Generation that introduced this type.
    pub generation: NamedResource,
    /// Damage class of moves of this type (pre-split games).
    pub move_damage_class: Option<NamedResource>,
    /// Localized names.
    pub names: Vec<Name>,
    /// Creatures having this type.
    pub pokemon: Vec<TypePokemon>,
    /// Moves of this type.
    pub moves: Vec<NamedResource>,
}

impl PokemonType {
    /// Name of the first move of this type, if any.
    #[must_use]
    pub fn first_move(&self) -> Option<&str> {
        self.moves.first().map(|m| m.name.as_str())
    }
}

/// How a type interacts with other types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DamageRelations {
    /// Types this type has no effect against.
    pub no_damage_to: Vec<NamedResource>,
    /// Types this type is not very effective against.
    pub half_damage_to: Vec<NamedResource>,
    /// Types this type is very effective against.
    pub double_damage_to: Vec<NamedResource>,
    /// Types that have no effect on this type.
    pub no_damage_from: Vec<NamedResource>,
    /// Types that are not very effective against this type.
    pub half_damage_from: Vec<NamedResource>,
    /// Types that are very effective against this type.
    pub double_damage_from: Vec<NamedResource>,
}

/// Damage relations valid up to a past generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDamageRelations {
    /// The last generation with these relations.
    pub generation: NamedResource,
    /// The relations.
    pub damage_relations: DamageRelations,
}

/// A creature listed under a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePokemon {
    /// Slot the type occupies on the creature.
    pub slot: u32,
    /// The creature.
    pub pokemon: NamedResource,
}
