// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envoverlay.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envoverlay.toml (cwd, optional)
//! 3. --ini FILE (required, repeatable)
//! 4. ENVOVERLAY_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVOVERLAY_OVERLAY__PREFIX=SHADOW_      → overlay.prefix = "SHADOW_"
//! ENVOVERLAY_OVERLAY__SINK=tracing        → overlay.sink = "tracing"
//! ENVOVERLAY_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! ```
//!
//! These only configure the tool. The variables being overridden are a
//! separate concern handled by [`crate::overlay`].

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::overlay::Overlay;

use loader::ConfigLoader;
use types::{GlobalConfig, OverlayConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envoverlay.toml";

/// Prefix for environment variables that configure envoverlay itself.
pub const ENV_PREFIX: &str = "ENVOVERLAY";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Override pass options.
    pub overlay: OverlayConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envoverlay::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envoverlay.toml")
    ///     .with_env_prefix("ENVOVERLAY")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Builds the override pass described by `[overlay]`.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        Overlay::builder().prefix(self.overlay.prefix.as_str()).build()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file", log_file.display().to_string());
        }
        options.insert("overlay.prefix", format!("{:?}", self.overlay.prefix));
        options.insert("overlay.sink", self.overlay.sink.to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
