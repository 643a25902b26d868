use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Result, StyleGateError};
use crate::scanner::default_deny_segments;

/// Settings file looked up next to the executable when `--settings` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "stylegate.settings";

/// Validated, immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub settings: PathBuf,
    pub engine: PathBuf,
    pub recursive: bool,
    pub extensions: Vec<String>,
    pub deny_segments: Vec<String>,
}

impl RunConfig {
    /// Resolve and validate the run configuration from parsed arguments.
    ///
    /// The settings path is checked before the root path, and both checks
    /// fail the run before any directory enumeration starts.
    ///
    /// # Errors
    /// Returns `InvalidSettingsPath` if the settings file does not exist,
    /// `InvalidProjectPath` if the root is blank or not a directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = match &cli.settings {
            Some(path) => path.clone(),
            None => default_settings_path()?,
        };
        if !settings.is_file() {
            return Err(StyleGateError::InvalidSettingsPath { path: settings });
        }

        let root = cli.path.clone();
        if root.as_os_str().is_empty() || !root.is_dir() {
            return Err(StyleGateError::InvalidProjectPath { path: root });
        }

        let mut deny_segments = if cli.no_default_excludes {
            Vec::new()
        } else {
            default_deny_segments()
        };
        deny_segments.extend(cli.exclude.iter().cloned());

        Ok(Self {
            root,
            settings,
            engine: cli.engine.clone(),
            recursive: !cli.not_recursive,
            extensions: cli.ext.clone(),
            deny_segments,
        })
    }
}

fn default_settings_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map_or_else(
        || PathBuf::from(DEFAULT_SETTINGS_FILE),
        |dir| dir.join(DEFAULT_SETTINGS_FILE),
    ))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
