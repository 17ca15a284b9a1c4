//! Tabular, colorized terminal report.
//!
//! Color is display only; the machine-readable result of a run is the list
//! of pass flags returned by the runner.

use std::io::{self, Stdout, Write};

use colored::{Color, Colorize};
use pokedex_application::ports::Reporter;
use pokedex_domain::{RunSummary, TestResult};

/// Width of the divider drawn between rows.
pub const DIVIDER_WIDTH: usize = 64;

/// Column width labels are padded to. Longer labels are not truncated.
pub const LABEL_WIDTH: usize = 48;

const DIM: Color = Color::BrightBlack;

/// Reporter writing one aligned line per result plus a summary.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
    color: bool,
}

impl ConsoleReporter<Stdout> {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to the given sink, with color enabled.
    pub const fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// Enable or disable ANSI colors (builder pattern).
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn render_line(&self, result: &TestResult) -> String {
        let status = if result.passed() {
            self.paint("[PASS]", Color::Green)
        } else {
            self.paint("[FAIL]", Color::Red)
        };
        let time = self.paint(&format!("{:.1}ms", result.duration_ms()), DIM);

        format!("{status} {:<width$} {time}", result.label, width = LABEL_WIDTH)
    }

    fn render_summary(&self, summary: RunSummary) -> String {
        if summary.all_passed() {
            self.paint(
                &format!("{}/{} passed", summary.passed, summary.total),
                Color::Green,
            )
        } else {
            format!(
                "{}, {}",
                self.paint(&format!("{} failed", summary.failed), Color::Red),
                self.paint(&format!("{} passed", summary.passed), Color::Green)
            )
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, results: &[TestResult]) -> io::Result<()> {
        let divider = self.paint(&"-".repeat(DIVIDER_WIDTH), DIM);

        writeln!(self.out, "{divider}")?;
        for result in results {
            let line = self.render_line(result);
            writeln!(self.out, "{line}")?;
            writeln!(self.out, "{divider}")?;
        }

        let summary = self.render_summary(RunSummary::from_results(results));
        writeln!(self.out, "{summary}")?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
