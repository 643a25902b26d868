mod jsonl;

pub use jsonl::JsonlEngine;

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;

/// A single rule infraction reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Violation {
    pub path: PathBuf,
    pub line: u64,
    pub message: String,
    pub check_id: String,
}

/// Callbacks invoked by the engine while a run is in flight.
///
/// Engines emit violations for one file as a contiguous run, separated by
/// textual output events. Consumers that group by file rely on that
/// ordering.
pub trait AnalysisHandler {
    /// A unit of textual output was produced by the engine.
    fn output_generated(&mut self, message: &str);

    /// A violation was detected.
    fn violation_encountered(&mut self, violation: &Violation);
}

/// The external analysis engine boundary.
///
/// The engine owns all rule-checking logic; the runner only registers files
/// and consumes the resulting event stream.
pub trait AnalysisEngine {
    /// Add files to the analysis unit for the next run.
    fn register_files(&mut self, files: Vec<PathBuf>);

    /// Execute the analysis synchronously.
    ///
    /// Every handler callback fires on the calling thread before this
    /// returns; the `&mut` borrow guarantees the handler cannot be invoked
    /// outside the run on any exit path.
    ///
    /// # Errors
    /// Returns an error if the engine cannot be started or fails.
    fn run(&mut self, handler: &mut dyn AnalysisHandler) -> Result<()>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
