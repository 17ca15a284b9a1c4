//! Clock port for timing test cases

use std::time::Instant;

/// Port for reading a monotonic timestamp.
///
/// This abstraction allows testing timing-dependent code by providing
/// a mock implementation.
pub trait Clock: Send + Sync {
    /// Returns the current monotonic instant.
    fn now(&self) -> Instant;
}
