//! Typed records returned by the upstream API.
//!
//! Deserialization is structural only: unknown fields are ignored, nullable
//! fields are `Option`, and loosely-shaped sub-trees stay as
//! [`serde_json::Value`].

mod ability;
mod common;
mod pokemon;
mod pokemon_type;
mod species;

pub use ability::{Ability, AbilityPokemon, EffectChange, EffectEntry};
pub use common::{FlavorText, GameIndex, Name};
pub use pokemon::{
    AbilitySlot, Cries, HeldItem, HeldItemVersion, Move, MoveVersionDetail, PastAbilities,
    PastAbilitySlot, Pokemon, Sprites, Stat, TypeSlot,
};
pub use pokemon_type::{DamageRelations, PastDamageRelations, PokemonType, TypePokemon};
pub use species::{
    Description, EvolutionChainLink, Genus, PalParkEncounter, PokedexNumber, Species, Variety,
};
