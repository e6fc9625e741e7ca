// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::print::PrintFormat;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envoverlay", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envoverlay",
        "-l",
        "4",
        "-p",
        "SHADOW_",
        "--sink",
        "stderr",
        "-s",
        "global.log_file=out.log",
        "print",
    ])
    .unwrap();

    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "global.log_file=out.log",
            "global.output_log_level=4",
            "global.file_log_level=4",
            "overlay.prefix=SHADOW_",
            "overlay.sink=stderr",
        ]
    );
}

#[test]
fn test_parse_empty_prefix() {
    let cli = Cli::try_parse_from(["envoverlay", "--prefix", "", "print"]).unwrap();
    assert_eq!(cli.global.prefix.as_deref(), Some(""));
    assert_eq!(cli.global.to_config_overrides(), ["overlay.prefix="]);
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["envoverlay", "-l", "6", "print"]).is_err());
}

#[test]
fn test_parse_print_format() {
    let cli = Cli::try_parse_from(["envoverlay", "print", "--format", "json"]).unwrap();
    let Some(Command::Print(args)) = cli.command else {
        panic!("expected print command");
    };
    assert_eq!(args.format, PrintFormat::Json);

    let cli = Cli::try_parse_from(["envoverlay", "print"]).unwrap();
    let Some(Command::Print(args)) = cli.command else {
        panic!("expected print command");
    };
    assert_eq!(args.format, PrintFormat::Env);
}

#[test]
fn test_parse_exec_passes_hyphen_args() {
    let cli = Cli::try_parse_from(["envoverlay", "exec", "ls", "-la", "--color=never", "/tmp"])
        .unwrap();
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.program, "ls");
    assert_eq!(args.args, ["-la", "--color=never", "/tmp"]);
}

#[test]
fn test_parse_exec_requires_program() {
    assert!(Cli::try_parse_from(["envoverlay", "exec"]).is_err());
}
