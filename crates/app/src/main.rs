//! Pokedex - Main Entry Point
//!
//! Runs the fixed suite once against the live API and exits with status
//! 0 when every case passed, 1 otherwise.

use std::process::ExitCode;

use pokedex_domain::ApiSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pokedex::logging::init();

    tracing::info!("Starting pokedex suite v{}", env!("CARGO_PKG_VERSION"));

    match pokedex::run(ApiSettings::default()).await {
        Ok(true) => {
            println!("✅ All tests passed");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("❌ Some tests failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "could not start the suite");
            ExitCode::FAILURE
        }
    }
}
