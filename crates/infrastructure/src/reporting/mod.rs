//! Result reporters.

mod console;

pub use console::{ConsoleReporter, DIVIDER_WIDTH, LABEL_WIDTH};
