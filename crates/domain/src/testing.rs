//! Test harness result model.
//!
//! A run produces exactly one [`TestResult`] per test case. Each result
//! carries one of three outcomes: passed, failed without detail (the check
//! evaluated false), or errored with a message (the action itself failed).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a single test case ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestOutcome {
    /// The check evaluated true.
    Passed,
    /// The action completed but its check evaluated false.
    Failed,
    /// The action returned an error or panicked.
    Errored {
        /// Error message.
        message: String,
    },
}

impl TestOutcome {
    /// Maps a completed check to an outcome.
    #[must_use]
    pub const fn from_check(ok: bool) -> Self {
        if ok { Self::Passed } else { Self::Failed }
    }

    /// Creates an errored outcome.
    #[must_use]
    pub fn errored(message: impl Into<String>) -> Self {
        Self::Errored {
            message: message.into(),
        }
    }
}

/// Result of running a single test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Label of the test case.
    pub label: String,
    /// Wall time spent in the action.
    pub duration: Duration,
    /// How the case ended.
    pub outcome: TestOutcome,
}

impl TestResult {
    /// Creates a new result.
    #[must_use]
    pub fn new(label: impl Into<String>, duration: Duration, outcome: TestOutcome) -> Self {
        Self {
            label: label.into(),
            duration,
            outcome,
        }
    }

    /// Whether the case passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, TestOutcome::Passed)
    }

    /// Error message, present only when the action itself failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            TestOutcome::Errored { message } => Some(message),
            TestOutcome::Passed | TestOutcome::Failed => None,
        }
    }

    /// Duration in fractional milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Pass/fail counts over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of cases.
    pub total: usize,
    /// Number of passed cases.
    pub passed: usize,
    /// Number of failed cases (with or without error).
    pub failed: usize,
}

impl RunSummary {
    /// Counts the given results.
    #[must_use]
    pub fn from_results(results: &[TestResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();

        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    /// Check if all cases passed. An empty run counts as passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Reduces per-case pass flags to the overall verdict.
#[must_use]
pub fn all_passed(flags: &[bool]) -> bool {
    flags.iter().all(|passed| *passed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcomes_are_mutually_exclusive() {
        let passed = TestResult::new("a", Duration::ZERO, TestOutcome::Passed);
        assert!(passed.passed());
        assert_eq!(passed.error(), None);

        let failed = TestResult::new("b", Duration::ZERO, TestOutcome::from_check(false));
        assert!(!failed.passed());
        assert_eq!(failed.error(), None);

        let errored = TestResult::new("c", Duration::ZERO, TestOutcome::errored("boom"));
        assert!(!errored.passed());
        assert_eq!(errored.error(), Some("boom"));
    }

    #[test]
    fn test_duration_ms_keeps_sub_millisecond_precision() {
        let result = TestResult::new("a", Duration::from_micros(1_250), TestOutcome::Passed);
        assert!((result.duration_ms() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            TestResult::new("a", Duration::ZERO, TestOutcome::Failed),
            TestResult::new("b", Duration::ZERO, TestOutcome::Passed),
        ];
        let summary = RunSummary::from_results(&results);
        assert_eq!(
            summary,
            RunSummary {
                total: 2,
                passed: 1,
                failed: 1
            }
        );
        assert!(!summary.all_passed());
        assert!(RunSummary::from_results(&[]).all_passed());
    }

    #[test]
    fn test_all_passed_flags() {
        assert!(all_passed(&[true, true]));
        assert!(!all_passed(&[true, false]));
        assert!(all_passed(&[]));
    }
}
