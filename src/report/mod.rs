use std::io::{self, IsTerminal, Write};

use crate::engine::{AnalysisHandler, Violation};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Aggregates one run's violation stream into console output and a count.
///
/// Constructed per run and handed to the engine for the duration of one
/// `run` call. The engine emits a file's violations as a contiguous run
/// between output events, so the file header is printed once when the
/// header flag is clear and the flag is reset on every output event.
pub struct RunReporter<W: Write> {
    out: W,
    use_colors: bool,
    violations: usize,
    header_printed: bool,
}

impl RunReporter<io::Stdout> {
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), mode)
    }
}

impl<W: Write> RunReporter<W> {
    #[must_use]
    pub fn new(out: W, mode: ColorMode) -> Self {
        Self {
            out,
            use_colors: should_use_colors(mode),
            violations: 0,
            header_printed: false,
        }
    }

    /// Number of violations encountered so far. Monotonically non-decreasing
    /// for the lifetime of the reporter.
    #[must_use]
    pub const fn violations(&self) -> usize {
        self.violations
    }

    #[must_use]
    pub const fn has_violations(&self) -> bool {
        self.violations > 0
    }

    fn write_alert_line(&mut self, text: &str) {
        if self.use_colors {
            writeln!(self.out, "{}{text}{}", ansi::RED, ansi::RESET).ok();
        } else {
            writeln!(self.out, "{text}").ok();
        }
    }
}

impl<W: Write> AnalysisHandler for RunReporter<W> {
    fn output_generated(&mut self, _message: &str) {
        self.header_printed = false;
    }

    fn violation_encountered(&mut self, violation: &Violation) {
        if !self.header_printed {
            self.header_printed = true;
            writeln!(self.out, "{}", violation.path.display()).ok();
        }

        self.violations += 1;
        let line = format!(
            "  Line {}: {} ({})",
            violation.line, violation.message, violation.check_id
        );
        self.write_alert_line(&line);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
