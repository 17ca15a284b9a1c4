//! Pokedex Application - Fetch client and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The typed `PokeApi` fetch client
//! - Application-level error handling

pub mod client;
pub mod error;
pub mod ports;

pub use client::PokeApi;
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, FetchError, HttpFetcher, RawResponse, Reporter};
