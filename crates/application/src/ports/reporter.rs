//! Result reporter port

use std::io;

use pokedex_domain::TestResult;

/// Port for rendering the results of a test run.
pub trait Reporter {
    /// Renders the full result sequence of one run.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn report(&mut self, results: &[TestResult]) -> io::Result<()>;
}
