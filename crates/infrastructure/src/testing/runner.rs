//! Test runner implementation.
//!
//! Executes test cases strictly one after another and produces one result
//! per case. A failing case never aborts the suite and there is no per-case
//! timeout: a case that never settles blocks the run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use pokedex_application::ports::{Clock, Reporter};
use pokedex_domain::{TestOutcome, TestResult};
use tracing::{debug, info, warn};

use super::case::{TestAction, TestCase};
use super::suite::TestSuite;
use crate::adapters::SystemClock;

/// Test runner that executes a suite sequentially.
#[derive(Debug, Default)]
pub struct TestRunner<C: Clock = SystemClock> {
    clock: C,
}

impl TestRunner<SystemClock> {
    /// Create a new test runner timed by the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TestRunner<C> {
    /// Create a runner timed by the given clock.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Run a suite, hand the results to the reporter and return the pass
    /// flag of every case in declaration order.
    pub async fn run<R>(&self, suite: TestSuite, reporter: &mut R) -> Vec<bool>
    where
        R: Reporter + ?Sized,
    {
        let results = self.execute(suite).await;

        if let Err(e) = reporter.report(&results) {
            warn!(error = %e, "failed to write test report");
        }

        results.iter().map(TestResult::passed).collect()
    }

    /// Run every case of a suite in order, without reporting.
    pub async fn execute(&self, suite: TestSuite) -> Vec<TestResult> {
        info!(suite = %suite.name, cases = suite.len(), "running test suite");

        let mut results = Vec::with_capacity(suite.len());
        for case in suite.cases {
            results.push(self.run_case(case).await);
        }

        results
    }

    /// Run a single case to completion.
    pub async fn run_case(&self, case: TestCase) -> TestResult {
        let (label, action) = case.into_parts();
        debug!(test = %label, "running test");

        let start = self.clock.now();
        let outcome = match settle(action).await {
            Ok(ok) => TestOutcome::from_check(ok),
            Err(message) => TestOutcome::errored(message),
        };
        let duration = self.clock.now().saturating_duration_since(start);

        match &outcome {
            TestOutcome::Passed => info!(test = %label, ?duration, "passed"),
            TestOutcome::Failed => warn!(test = %label, ?duration, "failed"),
            TestOutcome::Errored { message } => {
                warn!(test = %label, ?duration, error = %message, "errored");
            }
        }

        TestResult::new(label, duration, outcome)
    }
}

/// Drives an action to completion, turning errors and panics into messages.
async fn settle(action: TestAction) -> Result<bool, String> {
    let future = panic::catch_unwind(AssertUnwindSafe(action)).map_err(panic_message)?;

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(ok)) => Ok(ok),
        Ok(Err(error)) => Err(format!("{error:#}")),
        Err(payload) => Err(panic_message(payload)),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "test panicked".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::testing::TestFuture;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    /// Clock that advances by a fixed step on every read.
    struct StepClock {
        base: Instant,
        step: Duration,
        reads: AtomicU32,
    }

    impl StepClock {
        fn new(step: Duration) -> Self {
            Self {
                base: Instant::now(),
                step,
                reads: AtomicU32::new(0),
            }
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> Instant {
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            self.base + self.step * n
        }
    }

    /// Reporter that keeps what it was given.
    #[derive(Default)]
    struct RecordingReporter {
        reports: Vec<Vec<TestResult>>,
    }

    impl Reporter for RecordingReporter {
        fn report(&mut self, results: &[TestResult]) -> io::Result<()> {
            self.reports.push(results.to_vec());
            Ok(())
        }
    }

    struct BrokenReporter;

    impl Reporter for BrokenReporter {
        fn report(&mut self, _results: &[TestResult]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn single(case: TestCase) -> TestSuite {
        TestSuite::new("single").with_case(case)
    }

    #[tokio::test]
    async fn test_trivial_true_passes() {
        let runner = TestRunner::new();
        let mut reporter = RecordingReporter::default();

        let flags = runner
            .run(
                single(TestCase::new("trivial true", || async { Ok(true) })),
                &mut reporter,
            )
            .await;

        assert_eq!(flags, vec![true]);
        let result = &reporter.reports[0][0];
        assert!(result.passed());
        assert_eq!(result.error(), None);
    }

    #[tokio::test]
    async fn test_false_is_failure_without_error() {
        let runner = TestRunner::new();
        let results = runner
            .execute(single(TestCase::new("resolves false", || async { Ok(false) })))
            .await;

        assert_eq!(results[0].outcome, TestOutcome::Failed);
        assert_eq!(results[0].error(), None);
    }

    #[tokio::test]
    async fn test_error_is_failure_with_message() {
        let runner = TestRunner::new();
        let results = runner
            .execute(single(TestCase::new("throws", || async {
                Err(anyhow::anyhow!("boom"))
            })))
            .await;

        assert!(!results[0].passed());
        assert_eq!(results[0].error(), Some("boom"));
    }

    #[tokio::test]
    async fn test_error_message_includes_context() {
        use anyhow::Context;

        let runner = TestRunner::new();
        let results = runner
            .execute(single(TestCase::new("context", || async {
                Err::<bool, _>(io::Error::other("refused")).context("loading pikachu")
            })))
            .await;

        assert_eq!(results[0].error(), Some("loading pikachu: refused"));
    }

    async fn explode() -> anyhow::Result<bool> {
        panic!("kaboom");
    }

    #[tokio::test]
    async fn test_panics_are_caught() {
        let runner = TestRunner::new();
        let suite = TestSuite::new("panics")
            .with_case(TestCase::new("panics while polled", explode))
            .with_case(TestCase::new("panics before the future", || -> TestFuture {
                panic!("{}", String::from("early"));
            }))
            .with_case(TestCase::new("still runs", || async { Ok(true) }));

        let results = runner.execute(suite).await;

        assert_eq!(results[0].error(), Some("kaboom"));
        assert_eq!(results[1].error(), Some("early"));
        assert!(results[2].passed());
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_suite() {
        let runner = TestRunner::new();
        let mut reporter = RecordingReporter::default();
        let suite = TestSuite::new("mixed")
            .with_case(TestCase::new("fails", || async { Ok(false) }))
            .with_case(TestCase::new("passes", || async { Ok(true) }));

        let flags = runner.run(suite, &mut reporter).await;

        assert_eq!(flags, vec![false, true]);
        assert_eq!(reporter.reports.len(), 1);
        assert_eq!(reporter.reports[0].len(), 2);
    }

    #[tokio::test]
    async fn test_results_follow_declaration_order() {
        let labels = ["one", "two", "three", "four"];
        let mut suite = TestSuite::new("order");
        for (i, label) in labels.iter().enumerate() {
            suite.add(TestCase::new(*label, move || async move { Ok(i % 2 == 0) }));
        }

        let results = TestRunner::new().execute(suite).await;

        assert_eq!(results.len(), labels.len());
        for (result, label) in results.iter().zip(labels) {
            assert_eq!(result.label, label);
        }
    }

    #[tokio::test]
    async fn test_cases_never_overlap() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_in_flight = Arc::new(AtomicUsize::new(0));
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut suite = TestSuite::new("sequential");
        for i in 0..4 {
            let in_flight = Arc::clone(&in_flight);
            let max_in_flight = Arc::clone(&max_in_flight);
            let order = Arc::clone(&order);
            suite.add(TestCase::new(format!("case {i}"), move || async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_in_flight.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5 * (4 - i))).await;
                order.lock().unwrap().push(i);
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(true)
            }));
        }

        TestRunner::new().execute(suite).await;

        assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_case_may_fan_out_internally() {
        let suite = single(TestCase::new("fan out", || async {
            let (a, b) = tokio::try_join!(
                async { Ok::<_, anyhow::Error>(1) },
                async { Ok::<_, anyhow::Error>(1) }
            )?;
            Ok::<_, anyhow::Error>(a == b)
        }));

        let results = TestRunner::new().execute(suite).await;
        assert!(results[0].passed());
    }

    #[tokio::test]
    async fn test_duration_measured_with_clock() {
        let runner = TestRunner::with_clock(StepClock::new(Duration::from_micros(1_500)));
        let results = runner
            .execute(single(TestCase::new("timed", || async { Ok(true) })))
            .await;

        assert_eq!(results[0].duration, Duration::from_micros(1_500));
    }

    #[tokio::test]
    async fn test_report_failure_still_returns_flags() {
        let flags = TestRunner::new()
            .run(
                single(TestCase::new("passes", || async { Ok(true) })),
                &mut BrokenReporter,
            )
            .await;

        assert_eq!(flags, vec![true]);
    }

    #[tokio::test]
    async fn test_same_suite_twice_same_pattern() {
        fn build() -> TestSuite {
            TestSuite::new("idempotent")
                .with_case(TestCase::new("a", || async { Ok(true) }))
                .with_case(TestCase::new("b", || async { Ok(false) }))
                .with_case(TestCase::new("c", || async { Err(anyhow::anyhow!("x")) }))
        }

        let runner = TestRunner::new();
        let mut reporter = RecordingReporter::default();
        let first = runner.run(build(), &mut reporter).await;
        let second = runner.run(build(), &mut reporter).await;

        assert_eq!(first, second);
    }

    #[test]
    fn test_panic_message_fallback() {
        assert_eq!(panic_message(Box::new(42_u8)), "test panicked");
        assert_eq!(panic_message(Box::new("static")), "static");
    }
}
