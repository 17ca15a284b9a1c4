//! Pokedex Infrastructure - Adapters and the test harness
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the sequential test runner
//! and its console reporter.

pub mod adapters;
pub mod reporting;
pub mod testing;

pub use adapters::{ReqwestFetcher, SystemClock};
pub use reporting::ConsoleReporter;
pub use testing::{TestCase, TestRunner, TestSuite};
