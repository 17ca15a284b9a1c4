//! `/pokemon/{id}` records.

use serde::{Deserialize, Serialize};

use super::common::GameIndex;
use crate::pagination::NamedResource;

/// An individual creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Numeric identifier.
    pub id: u32,
    /// Resource name.
    pub name: String,
    /// Base experience gained for defeating it (null for some forms).
    pub base_experience: Option<u32>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Sort order.
    pub order: i32,
    /// Whether this is the default form of its species.
    pub is_default: bool,
    /// URL listing encounter locations.
    pub location_area_encounters: String,
    /// Abilities it can have.
    pub abilities: Vec<AbilitySlot>,
    /// Cry audio files.
    pub cries: Option<Cries>,
    /// Forms it can take.
    pub forms: Vec<NamedResource>,
    /// Game indices per version.
    pub game_indices: Vec<GameIndex>,
    /// Items it may hold when encountered.
    pub held_items: Vec<HeldItem>,
    /// Moves it can learn.
    pub moves: Vec<Move>,
    /// Abilities it had in earlier generations.
    #[serde(default)]
    pub past_abilities: Vec<PastAbilities>,
    /// Types it had in earlier generations.
    #[serde(default)]
    pub past_types: Vec<serde_json::Value>,
    /// Species this creature belongs to.
    pub species: NamedResource,
    /// Sprite images.
    pub sprites: Sprites,
    /// Base stats.
    pub stats: Vec<Stat>,
    /// Elemental types.
    pub types: Vec<TypeSlot>,
}

/// Ability slot on a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    /// The ability.
    pub ability: NamedResource,
    /// Whether it is a hidden ability.
    pub is_hidden: bool,
    /// Slot number.
    pub slot: u32,
}

/// Cry audio URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cries {
    /// Latest cry.
    pub latest: Option<String>,
    /// Legacy cry.
    pub legacy: Option<String>,
}

/// Item a creature may hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    /// The item.
    pub item: NamedResource,
    /// Rarity per version.
    pub version_details: Vec<HeldItemVersion>,
}

/// Held item rarity for one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItemVersion {
    /// Encounter rarity.
    pub rarity: u32,
    /// Game version.
    pub version: NamedResource,
}

/// A learnable move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The move.
    #[serde(rename = "move")]
    pub move_: NamedResource,
    /// How and when it is learned per version group.
    pub version_group_details: Vec<MoveVersionDetail>,
}

/// Learn details of a move for one version group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveVersionDetail {
    /// Level at which it is learned.
    pub level_learned_at: u32,
    /// Learn method.
    pub move_learn_method: NamedResource,
    /// Order within the level-up list.
    pub order: Option<u32>,
    /// Version group.
    pub version_group: NamedResource,
}

/// Abilities a creature had in an earlier generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastAbilities {
    /// Ability slots of that generation.
    pub abilities: Vec<PastAbilitySlot>,
    /// The last generation with these abilities.
    pub generation: NamedResource,
}

/// Past ability slot; `ability` is null when the slot was empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastAbilitySlot {
    /// The ability, if any.
    pub ability: Option<NamedResource>,
    /// Whether it was hidden.
    pub is_hidden: bool,
    /// Slot number.
    pub slot: u32,
}

/// Sprite image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    /// Default front sprite.
    pub front_default: Option<String>,
    /// Female front sprite.
    pub front_female: Option<String>,
    /// Shiny front sprite.
    pub front_shiny: Option<String>,
    /// Shiny female front sprite.
    pub front_shiny_female: Option<String>,
    /// Default back sprite.
    pub back_default: Option<String>,
    /// Female back sprite.
    pub back_female: Option<String>,
    /// Shiny back sprite.
    pub back_shiny: Option<String>,
    /// Shiny female back sprite.
    pub back_shiny_female: Option<String>,
    /// Artwork from other sources (dream world, home, official artwork).
    #[serde(default)]
    pub other: Option<serde_json::Value>,
    /// Per-generation sprites.
    #[serde(default)]
    pub versions: Option<serde_json::Value>,
}

/// A base stat value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Base value.
    pub base_stat: u32,
    /// Effort points gained.
    pub effort: u32,
    /// The stat.
    pub stat: NamedResource,
}

/// Type slot on a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    /// Slot number.
    pub slot: u32,
    /// The type.
    #[serde(rename = "type")]
    pub type_: NamedResource,
}
