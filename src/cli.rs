use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "stylegate")]
#[command(author, version, about = "Style violation gate - run a static-analysis engine over a source tree")]
#[command(long_about = "Collects source files under a root directory, feeds them to an external\n\
    static-analysis engine, and reports every violation the engine emits.\n\n\
    Exit codes:\n  \
    0 - No violations found\n  \
    1 - Violations found\n  \
    2 - Invalid arguments, scan failure, or engine failure\n\n\
    The exit status after --help or --version defaults to 0; set\n\
    STYLEGATE_HELP_EXIT_CODE to override it for pipelines that treat a\n\
    help invocation as \"no analysis performed\".")]
pub struct Cli {
    /// Root directory to scan
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Path to the engine settings file (default: stylegate.settings next to the executable)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Analysis engine program to drive
    #[arg(long, default_value = "stylegate-engine")]
    pub engine: PathBuf,

    /// Do not descend into subdirectories
    #[arg(short = 'n', long)]
    pub not_recursive: bool,

    /// File extensions to collect (comma-separated, e.g., cs,vb)
    #[arg(long, value_delimiter = ',', default_value = "cs")]
    pub ext: Vec<String>,

    /// Additional path segments to exclude (substring match, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Drop the built-in build/package directory excludes
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
