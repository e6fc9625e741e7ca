// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use envoverlay::cli::print::PrintFormat;
use envoverlay::cli::{Cli, Command};

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["envoverlay", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["envoverlay"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_options_and_inis() {
    let cli = Cli::try_parse_from(["envoverlay", "--no-default-inis", "-i", "a.toml", "-i", "b.toml", "inis"])
        .unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
    assert!(cli.global.no_default_inis);
    assert_eq!(cli.global.inis.len(), 2);

    let cli = Cli::try_parse_from(["envoverlay", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
}

// =============================================================================
// Print / Exec
// =============================================================================

#[test]
fn cli_print_json_with_sink() {
    let cli = Cli::try_parse_from(["envoverlay", "--sink", "stderr", "print", "-f", "json"]).unwrap();
    let Some(Command::Print(args)) = cli.command else {
        panic!("expected print command");
    };
    assert_eq!(args.format, PrintFormat::Json);
    assert_eq!(cli.global.to_config_overrides(), ["overlay.sink=stderr"]);
}

#[test]
fn cli_print_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["envoverlay", "print", "--format", "yaml"]).is_err());
}

#[test]
fn cli_exec_requires_program() {
    assert!(Cli::try_parse_from(["envoverlay", "exec"]).is_err());
}

#[test]
fn cli_exec_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "envoverlay",
        "--prefix",
        "CI_",
        "exec",
        "cargo",
        "--prefix",
        "x",
    ])
    .unwrap();
    assert_eq!(cli.global.prefix.as_deref(), Some("CI_"));
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.program, "cargo");
    assert_eq!(args.args, ["--prefix", "x"]);
}

#[test]
fn cli_file_log_level_falls_back_to_log_level() {
    let cli = Cli::try_parse_from(["envoverlay", "-l", "1", "--file-log-level", "4", "print"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        ["global.output_log_level=1", "global.file_log_level=4"]
    );
}
