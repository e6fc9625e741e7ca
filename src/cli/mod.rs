// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envoverlay using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envoverlay [global options] <command>
//! version
//! options
//! inis
//! print [--format env|json]
//! exec <program> [args...]
//! ```

pub mod exec;
pub mod global;
pub mod print;

#[cfg(test)]
mod tests;

use crate::cli::exec::ExecArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::print::PrintArgs;
use clap::{Parser, Subcommand};

/// Prefixed environment variable overrides.
#[derive(Debug, Parser)]
#[command(
    name = "envoverlay",
    author,
    version,
    about = "Prefixed environment variable overrides",
    long_about = "envoverlay Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Every variable named <PREFIX><NAME> forcibly sets <NAME>, even\n\
                  when <NAME> is already set. The default prefix is VIBE_TOOLS_,\n\
                  so VIBE_TOOLS_OPENAI_API_KEY overrides OPENAI_API_KEY.\n\n\
                  Do `envoverlay exec <program>` to run a program with the\n\
                  overridden environment, or `envoverlay print` to inspect it.",
    after_help = "CONFIG FILES:\n\n\
                  envoverlay reads `envoverlay.toml` from the current directory\n\
                  if it exists, then every file given with --ini, then\n\
                  ENVOVERLAY_<SECTION>__<KEY> environment variables. Use\n\
                  --no-default-inis to skip `envoverlay.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files in use.
    Inis,

    /// Prints the environment after overrides.
    Print(PrintArgs),

    /// Runs a program with the environment after overrides.
    Exec(ExecArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
