// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Destinations for override messages.
//!
//! ```text
//! OverrideSink
//!   overridden(&OverrideEvent)  one per rewritten key
//!   applied(count)              once, only when count > 0
//!
//! WriterSink<W>  stdout (default) / stderr / any io::Write
//! TracingSink    info! events with key + previous fields
//! MemorySink     Vec<String>, for callers that inspect messages
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use tracing::info;

use crate::error::ConfigError;

/// Marker that starts every override message.
pub const LOG_TAG: &str = "[VIBE_TOOLS_PREFIX]";

/// Number of characters of the new value shown in messages.
pub const PREVIEW_CHARS: usize = 8;

/// Whether the target key held a value before it was overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Previous {
    Existing,
    New,
}

impl Previous {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Existing => "existing",
            Self::New => "new",
        }
    }
}

impl fmt::Display for Previous {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single override, as reported to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverrideEvent<'a> {
    target_key: &'a str,
    previous: Previous,
    preview: &'a str,
}

impl<'a> OverrideEvent<'a> {
    /// Creates an event, truncating `value` to its first [`PREVIEW_CHARS`] characters.
    #[must_use]
    pub fn new(target_key: &'a str, previous: Previous, value: &'a str) -> Self {
        Self {
            target_key,
            previous,
            preview: preview(value),
        }
    }

    #[must_use]
    pub const fn target_key(&self) -> &'a str {
        self.target_key
    }

    #[must_use]
    pub const fn previous(&self) -> Previous {
        self.previous
    }

    #[must_use]
    pub const fn preview(&self) -> &'a str {
        self.preview
    }
}

impl fmt::Display for OverrideEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LOG_TAG} Overrode {}: {} -> {}...",
            self.target_key, self.previous, self.preview
        )
    }
}

/// Returns the first [`PREVIEW_CHARS`] characters of `value`.
///
/// Counts characters, not bytes, so multi-byte values are never split.
#[must_use]
pub fn preview(value: &str) -> &str {
    value
        .char_indices()
        .nth(PREVIEW_CHARS)
        .map_or(value, |(end, _)| &value[..end])
}

/// Formats the message emitted after a pass that overrode `count` keys.
#[must_use]
pub fn summary_line(count: usize) -> String {
    format!("{LOG_TAG} Applied {count} prefixed environment variable overrides")
}

/// Receives override notifications in the order the overrides happen.
pub trait OverrideSink {
    /// Called once per rewritten target key.
    fn overridden(&mut self, event: &OverrideEvent<'_>);

    /// Called after the pass, only if at least one key was rewritten.
    fn applied(&mut self, count: usize);
}

/// Writes one line per message to an output stream.
///
/// Write failures are ignored.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> OverrideSink for WriterSink<W> {
    fn overridden(&mut self, event: &OverrideEvent<'_>) {
        let _ = writeln!(self.writer, "{event}");
    }

    fn applied(&mut self, count: usize) {
        let _ = writeln!(self.writer, "{}", summary_line(count));
    }
}

/// Forwards messages to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OverrideSink for TracingSink {
    fn overridden(&mut self, event: &OverrideEvent<'_>) {
        info!(
            key = event.target_key(),
            previous = event.previous().as_str(),
            "{event}"
        );
    }

    fn applied(&mut self, count: usize) {
        info!(count, "{}", summary_line(count));
    }
}

/// Collects messages in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OverrideSink for MemorySink {
    fn overridden(&mut self, event: &OverrideEvent<'_>) {
        self.lines.push(event.to_string());
    }

    fn applied(&mut self, count: usize) {
        self.lines.push(summary_line(count));
    }
}

/// Sink selected by the `overlay.sink` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    Tracing,
}

impl SinkKind {
    /// Creates the sink this kind names.
    #[must_use]
    pub fn build(self) -> Box<dyn OverrideSink> {
        match self {
            Self::Stdout => Box::new(WriterSink::stdout()),
            Self::Stderr => Box::new(WriterSink::stderr()),
            Self::Tracing => Box::new(TracingSink),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::Stderr => write!(f, "stderr"),
            Self::Tracing => write!(f, "tracing"),
        }
    }
}

impl std::str::FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "tracing" => Ok(Self::Tracing),
            _ => Err(ConfigError::InvalidValue {
                section: "overlay".to_string(),
                key: "sink".to_string(),
                message: format!("expected 'stdout', 'stderr', or 'tracing', got '{s}'"),
            }),
        }
    }
}
