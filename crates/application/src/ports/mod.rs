//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod http_fetcher;
mod reporter;

pub use clock::Clock;
pub use http_fetcher::{FetchError, HttpFetcher, RawResponse};
pub use reporter::Reporter;
