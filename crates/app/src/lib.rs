//! Pokedex - live API test suite
//!
//! Wires the `reqwest` fetcher, the typed client and the sequential test
//! runner together and runs the fixed suite against the public API.

pub mod logging;
pub mod suite;

use std::sync::Arc;

use pokedex_application::PokeApi;
use pokedex_domain::{ApiSettings, all_passed};
use pokedex_infrastructure::{ConsoleReporter, ReqwestFetcher, TestRunner};

/// Runs the fixed suite against the API at `settings.base_url`, writing
/// the report to standard output.
///
/// Returns whether every case passed.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub async fn run(settings: ApiSettings) -> anyhow::Result<bool> {
    let fetcher = ReqwestFetcher::new(&settings)?;
    let api = PokeApi::new(Arc::new(fetcher), settings);

    let flags = TestRunner::new()
        .run(suite::build(&api), &mut ConsoleReporter::stdout())
        .await;

    Ok(all_passed(&flags))
}
