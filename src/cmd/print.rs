// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `print` command: shows the environment after overrides.
//!
//! ```text
//! current_env() --> Overlay::apply (sink from config) --> write_env
//!   env   KEY=VALUE per set variable, in capture order
//!   json  pretty object, unset variables as null
//! ```

use std::io::{self, Write};

use tracing::debug;

use crate::cli::print::{PrintArgs, PrintFormat};
use crate::config::Config;
use crate::core::env::container::EnvMap;
use crate::error::{OverlayResult, Result};

/// Run the print command.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run_print_command(args: &PrintArgs, config: &Config) -> Result<()> {
    let mut sink = config.overlay.sink.build();
    let env = config.overlay().apply_to_current(sink.as_mut());
    drop(sink);

    debug!(vars = env.len(), format = ?args.format, "printing environment");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_env(&env, args.format, &mut out)?;
    Ok(())
}

/// Writes `env` to `out` in the requested format.
///
/// # Errors
///
/// Returns an `OverlayError::Io` if the writer fails.
pub fn write_env<W: Write>(env: &EnvMap, format: PrintFormat, out: &mut W) -> OverlayResult<()> {
    match format {
        PrintFormat::Env => {
            for (key, value) in env.defined() {
                writeln!(out, "{key}={value}")?;
            }
        }
        PrintFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, env).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

