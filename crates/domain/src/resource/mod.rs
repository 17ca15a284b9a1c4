//! Resource addressing.
//!
//! Every upstream entity is reached through a [`ResourceKind`] (the URL path
//! segment) and a [`ResourceKey`] (numeric id or name).

mod key;
mod kind;

pub use key::ResourceKey;
pub use kind::ResourceKind;
