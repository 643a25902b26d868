use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGateError {
    #[error("Invalid settings path \"{}\"", path.display())]
    InvalidSettingsPath { path: PathBuf },

    #[error("Invalid project path \"{}\"", path.display())]
    InvalidProjectPath { path: PathBuf },

    #[error("Failed to scan \"{}\"", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to start engine \"{}\"", program.display())]
    EngineSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine protocol error: {0}")]
    Protocol(String),

    #[error("Engine failure: {0}")]
    Engine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StyleGateError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
