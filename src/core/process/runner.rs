// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!              |
//!              v
//!     build_command()
//!     args, env_clear + env, stdio
//!              |
//!              v
//!          spawn()
//!              |
//!      wait  <select>  token.cancelled()
//!        |                  |
//!        |               kill()
//!        v                  v
//!       ProcessOutput
//!    { exit_code, stdout, interrupted }
//! ```
//!
//! Exit codes are reported, never turned into errors; the caller decides
//! what a non-zero exit means.

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::core::env::is_representable;
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if spawning the child fails or waiting on it fails.
    pub async fn run(self) -> Result<ProcessOutput> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Spawns and runs the process with cancellation support.
    ///
    /// When the token is cancelled the child is killed and the output is
    /// returned with `interrupted = true` and exit code -1.
    ///
    /// # Errors
    ///
    /// Returns an error if spawning the child fails or waiting on it fails.
    pub async fn run_with_cancellation(self, token: CancellationToken) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if token.is_cancelled() {
            return Ok(ProcessOutput::new(-1, String::new(), true));
        }

        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        let mut child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let reader = child.stdout.take().map(|mut stdout| {
            tokio::spawn(async move {
                let mut buf = String::new();
                let _ = stdout.read_to_string(&mut buf).await;
                buf
            })
        });

        let (status, interrupted) = tokio::select! {
            status = child.wait() => (Some(status?), false),
            () = token.cancelled() => {
                warn!(process = %name, "interrupted, killing process");
                child.kill().await.ok();
                (None, true)
            }
        };

        let stdout = match reader {
            Some(handle) => handle.await.unwrap_or_default(),
            None => String::new(),
        };
        let exit_code = status.and_then(|s| s.code()).unwrap_or(-1);

        trace!(process = %name, exit_code, interrupted, "completed");
        Ok(ProcessOutput::new(exit_code, stdout, interrupted))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            for (key, value) in env.defined() {
                if is_representable(key, value) {
                    command.env(key, value);
                } else {
                    warn!(key, "variable cannot be passed to a child process, skipped");
                }
            }
        }

        command.stdin(Stdio::inherit());
        command.stdout(if self.captures_stdout() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        command.stderr(Stdio::inherit());
        command.kill_on_drop(true);

        command
    }
}
