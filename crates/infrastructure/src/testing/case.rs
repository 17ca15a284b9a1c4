//! A named, zero-argument asynchronous check.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Future produced by a test action.
///
/// `Ok(true)` passes, `Ok(false)` is a failure without detail and `Err`
/// is a failure carrying the error message.
pub type TestFuture = Pin<Box<dyn Future<Output = anyhow::Result<bool>> + Send>>;

/// Boxed test action; consumed by the single run that executes it.
pub type TestAction = Box<dyn FnOnce() -> TestFuture + Send>;

/// Pairing of a display label with an asynchronous check.
///
/// Immutable once constructed and consumed once by the runner.
pub struct TestCase {
    label: String,
    action: TestAction,
}

impl TestCase {
    /// Defines a test.
    ///
    /// The action may perform any asynchronous work, including parallel
    /// sub-fetches joined before it resolves.
    pub fn new<F, Fut>(label: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<bool>> + Send + 'static,
    {
        Self {
            label: label.into(),
            action: Box::new(move || Box::pin(action())),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Splits the case into its label and action.
    #[must_use]
    pub fn into_parts(self) -> (String, TestAction) {
        (self.label, self.action)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
