//! Test harness.
//!
//! This module provides the test case model, the ordered suite and the
//! sequential runner that executes cases against the live API.

mod case;
mod runner;
mod suite;

pub use case::{TestAction, TestCase, TestFuture};
pub use runner::TestRunner;
pub use suite::TestSuite;
