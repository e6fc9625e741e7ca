// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `exec` command: runs a program with the environment after overrides.
//!
//! ```text
//! current_env() --> Overlay::apply --> EnvMap
//!   --> which_in(program, PATH of EnvMap)
//!   --> run_with_cancellation(Ctrl-C token)
//!   --> child exit code (130 when interrupted)
//! ```
//!
//! The parent's own environment is never modified.

use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::cli::exec::ExecArgs;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Exit status reported when the child was interrupted with Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Run the exec command.
///
/// # Errors
///
/// Returns an error if the program cannot be found or spawned.
pub async fn run_exec_command(args: &ExecArgs, config: &Config) -> Result<ExitCode> {
    let mut sink = config.overlay.sink.build();
    let env = config.overlay().apply_to_current(sink.as_mut());
    drop(sink);

    let builder = ProcessBuilder::which_in(&args.program, env.get("PATH"))?
        .name(args.program.clone())
        .args(&args.args)
        .env(env);

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let output = builder.run_with_cancellation(token).await?;
    if output.is_interrupted() {
        warn!(program = %args.program, "interrupted");
        return Ok(ExitCode::from(INTERRUPTED_EXIT_CODE));
    }

    debug!(program = %args.program, exit_code = output.exit_code(), "finished");
    Ok(exit_code_from(output.exit_code()))
}

/// Maps a child exit code to the process exit status.
///
/// Codes outside 0-255 (including -1 for a signal) become a generic failure.
#[must_use]
pub fn exit_code_from(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}

