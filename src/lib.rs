// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        options / inis / print / exec
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, ENVOVERLAY_*, --set |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          overlay          |
//!              |  PREFIX<NAME> --> NAME     |
//!              |  OverrideSink reporting   |
//!              '-------------+-------------'
//!                            |
//!   +------------------------+----------------+
//!   |  core   env (EnvMap), process (exec)    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod overlay;
