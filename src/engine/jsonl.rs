use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use serde::Deserialize;

use super::{AnalysisEngine, AnalysisHandler, Violation};
use crate::error::{Result, StyleGateError};

/// One line of the engine's stdout stream.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum EngineEvent {
    Violation(Violation),
    Output { message: String },
}

/// Drives an external analyzer process over a line-delimited JSON protocol.
///
/// The adapter spawns `<program> --settings <file>`, writes the registered
/// file list to the child's stdin (one path per line), and dispatches each
/// stdout event to the handler as it arrives. The protocol requires the
/// engine to exit zero regardless of how many violations it reported;
/// stderr passes through untouched.
pub struct JsonlEngine {
    program: PathBuf,
    settings: PathBuf,
    files: Vec<PathBuf>,
}

impl JsonlEngine {
    /// Initialize the engine against a settings file.
    ///
    /// # Errors
    /// Returns `InvalidSettingsPath` if the settings file does not exist.
    pub fn initialize(program: impl Into<PathBuf>, settings: impl AsRef<Path>) -> Result<Self> {
        let settings = settings.as_ref().to_path_buf();
        if !settings.is_file() {
            return Err(StyleGateError::InvalidSettingsPath { path: settings });
        }

        Ok(Self {
            program: program.into(),
            settings,
            files: Vec::new(),
        })
    }

    fn spawn(&self) -> Result<Child> {
        Command::new(&self.program)
            .arg("--settings")
            .arg(&self.settings)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| StyleGateError::EngineSpawn {
                program: self.program.clone(),
                source: e,
            })
    }

    fn send_files(&self, child: &mut Child) -> Result<()> {
        let Some(mut stdin) = child.stdin.take() else {
            return Err(StyleGateError::Engine("engine stdin unavailable".to_string()));
        };
        for file in &self.files {
            writeln!(stdin, "{}", file.display())?;
        }
        // Closing stdin signals the end of the file list.
        drop(stdin);
        Ok(())
    }

    fn pump_events(child: &mut Child, handler: &mut dyn AnalysisHandler) -> Result<()> {
        let Some(stdout) = child.stdout.take() else {
            return Err(StyleGateError::Engine(
                "engine stdout unavailable".to_string(),
            ));
        };

        for line in BufReader::new(stdout).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let event: EngineEvent = serde_json::from_str(&line)
                .map_err(|e| StyleGateError::Protocol(format!("{e} in line {line:?}")))?;
            match event {
                EngineEvent::Output { message } => handler.output_generated(&message),
                EngineEvent::Violation(violation) => handler.violation_encountered(&violation),
            }
        }
        Ok(())
    }
}

impl AnalysisEngine for JsonlEngine {
    fn register_files(&mut self, files: Vec<PathBuf>) {
        self.files.extend(files);
    }

    fn run(&mut self, handler: &mut dyn AnalysisHandler) -> Result<()> {
        let mut child = self.spawn()?;

        let result = self
            .send_files(&mut child)
            .and_then(|()| Self::pump_events(&mut child, handler));

        if result.is_err() {
            // Reap the child before surfacing the error.
            let _ = child.kill();
            let _ = child.wait();
            return result;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(StyleGateError::Engine(format!(
                "engine exited with {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
