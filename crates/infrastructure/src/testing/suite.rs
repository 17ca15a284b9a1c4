//! Ordered collection of test cases.

use super::case::TestCase;

/// A test suite; declaration order is execution order.
#[derive(Debug, Default)]
pub struct TestSuite {
    /// Suite name, used in logs.
    pub name: String,
    /// Cases in declaration order.
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Create a new empty test suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Add a case to the suite.
    pub fn add(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    /// Add a case (builder pattern).
    #[must_use]
    pub fn with_case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Labels in declaration order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.cases.iter().map(TestCase::label).collect()
    }

    /// Check if the suite is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Get the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }
}
