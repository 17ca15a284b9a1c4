//! Pokedex Domain - Core data types
//!
//! This crate defines the typed records of the upstream creature-data API
//! and the result model of the test harness.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod model;
pub mod pagination;
pub mod resource;
pub mod settings;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use model::{Ability, Pokemon, PokemonType, Species};
pub use pagination::{NamedResource, Page, PageOptions};
pub use resource::{ResourceKey, ResourceKind};
pub use settings::ApiSettings;
pub use testing::{RunSummary, TestOutcome, TestResult, all_passed};
