// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `print` command.
//!
//! ```text
//! envoverlay print [--format env|json]
//! env  → KEY=VALUE per set variable, insertion order
//! json → {"KEY": "VALUE" | null, ...}
//! ```

use clap::{Args, ValueEnum};

/// Arguments for the `print` command.
#[derive(Debug, Clone, Args)]
pub struct PrintArgs {
    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = PrintFormat::Env)]
    pub format: PrintFormat,
}

/// Output formats for the resulting environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// `KEY=VALUE` lines.
    Env,
    /// A single JSON object.
    Json,
}
