use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_default_path_is_current_dir() {
    let cli = Cli::parse_from(["stylegate"]);
    assert_eq!(cli.path, PathBuf::from("."));
}

#[test]
fn cli_path_short_and_long() {
    let cli = Cli::parse_from(["stylegate", "--path", "src"]);
    assert_eq!(cli.path, PathBuf::from("src"));

    let cli = Cli::parse_from(["stylegate", "-p", "src"]);
    assert_eq!(cli.path, PathBuf::from("src"));
}

#[test]
fn cli_settings_defaults_to_none() {
    let cli = Cli::parse_from(["stylegate"]);
    assert_eq!(cli.settings, None);
}

#[test]
fn cli_settings_accepts_path() {
    let cli = Cli::parse_from(["stylegate", "--settings", "custom.settings"]);
    assert_eq!(cli.settings, Some(PathBuf::from("custom.settings")));
}

#[test]
fn cli_engine_has_default() {
    let cli = Cli::parse_from(["stylegate"]);
    assert_eq!(cli.engine, PathBuf::from("stylegate-engine"));
}

#[test]
fn cli_recursive_by_default() {
    let cli = Cli::parse_from(["stylegate"]);
    assert!(!cli.not_recursive);

    let cli = Cli::parse_from(["stylegate", "-n"]);
    assert!(cli.not_recursive);
}

#[test]
fn cli_ext_defaults_to_cs() {
    let cli = Cli::parse_from(["stylegate"]);
    assert_eq!(cli.ext, vec!["cs".to_string()]);
}

#[test]
fn cli_ext_comma_separated() {
    let cli = Cli::parse_from(["stylegate", "--ext", "cs,vb"]);
    assert_eq!(cli.ext, vec!["cs".to_string(), "vb".to_string()]);
}

#[test]
fn cli_exclude_repeatable() {
    let cli = Cli::parse_from(["stylegate", "-x", "generated", "--exclude", "vendor"]);
    assert_eq!(cli.exclude, vec!["generated".to_string(), "vendor".to_string()]);
}

#[test]
fn cli_no_default_excludes_flag() {
    let cli = Cli::parse_from(["stylegate", "--no-default-excludes"]);
    assert!(cli.no_default_excludes);
}

#[test]
fn cli_color_choices() {
    let cli = Cli::parse_from(["stylegate", "--color", "never"]);
    assert!(matches!(cli.color, ColorChoice::Never));

    let cli = Cli::parse_from(["stylegate", "--color", "always"]);
    assert!(matches!(cli.color, ColorChoice::Always));

    let cli = Cli::parse_from(["stylegate"]);
    assert!(matches!(cli.color, ColorChoice::Auto));
}

#[test]
fn cli_quiet_flag() {
    let cli = Cli::parse_from(["stylegate", "--quiet"]);
    assert!(cli.quiet);
}
