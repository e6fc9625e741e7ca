// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which_in("program", PATH)
//!   .args() .env(EnvMap) .capture_stdout()
//!   .run() / .run_with_cancellation()
//!       --> tokio::process::Command (env_clear + set vars)
//!       --> ProcessOutput { exit_code, stdout, interrupted }
//! ```

pub mod builder;
mod runner;
