// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment and process management.
//!
//! ```text
//!        core
//!         |
//!    +----+----+
//!    v         v
//!   env     process
//!    |         |
//!  EnvMap   Builder
//!  current  Output
//! ```

pub mod env;
pub mod process;
