use clap::Parser;
use clap::error::ErrorKind;

use stylegate::cli::{Cli, ColorChoice};
use stylegate::config::RunConfig;
use stylegate::engine::{AnalysisEngine, JsonlEngine};
use stylegate::report::{ColorMode, RunReporter};
use stylegate::scanner::{DirectoryScanner, FileScanner, SegmentFilter};
use stylegate::{EXIT_SUCCESS, EXIT_USAGE_ERROR, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => std::process::exit(handle_parse_error(&e)),
    };

    std::process::exit(run(&cli));
}

fn handle_parse_error(err: &clap::Error) -> i32 {
    err.print().ok();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => help_exit_code(),
        _ => EXIT_USAGE_ERROR,
    }
}

/// Exit status after printing help or version text.
///
/// One widely-deployed predecessor of this tool exited with a failure
/// status on `--help`; pipelines that depend on that can restore it via
/// `STYLEGATE_HELP_EXIT_CODE`.
fn help_exit_code() -> i32 {
    std::env::var("STYLEGATE_HELP_EXIT_CODE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(EXIT_SUCCESS)
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> stylegate::Result<i32> {
    // 1. Resolve and validate the run configuration (fails before any scan)
    let config = RunConfig::from_cli(cli)?;

    if !cli.quiet {
        let display_root = config
            .root
            .canonicalize()
            .unwrap_or_else(|_| config.root.clone());
        println!("Checking folder: {}", display_root.display());
    }

    // 2. Collect candidate files
    let filter = SegmentFilter::new(config.extensions.clone(), config.deny_segments.clone());
    let scanner = DirectoryScanner::with_recursion(filter, config.recursive);
    let files = scanner.scan(&config.root)?;

    if !cli.quiet {
        println!("Checking {} files", files.len());
    }

    // 3. Hand the file set to the engine and consume its event stream
    let mut engine = JsonlEngine::initialize(&config.engine, &config.settings)?;
    engine.register_files(files);

    let mut reporter = RunReporter::stdout(color_choice_to_mode(cli.color));
    engine.run(&mut reporter)?;

    // 4. Map the violation count to the final status
    Ok(finish(reporter.violations()))
}

fn finish(violations: usize) -> i32 {
    if violations > 0 {
        println!("Finished with errors");
        EXIT_VIOLATIONS
    } else {
        println!("Success");
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
