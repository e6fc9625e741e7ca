// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prefixed environment overrides.
//!
//! A variable named `<PREFIX><NAME>` forcibly sets `<NAME>`, whether or not
//! `<NAME>` was already set.
//!
//! ```text
//! snapshot(env)
//!   for (key, value) in insertion order
//!     key !starts_with prefix  --> skip
//!     value unset              --> skip
//!     env[key - prefix] = value       (always wins)
//!     sink.overridden(target, existing|new, preview)
//! count > 0 --> sink.applied(count)
//! ```
//!
//! The pass iterates over a snapshot taken at call start, so target keys
//! written during the pass are never revisited, even when they themselves
//! start with the prefix. Colliding targets are last-write-wins.

pub mod sink;


use bon::Builder;
use tracing::{trace, warn};

use crate::core::env::container::EnvMap;
use crate::core::env::{current_env, is_representable};

use sink::{OverrideEvent, OverrideSink, Previous, WriterSink};

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "VIBE_TOOLS_";

/// Copies every set `<prefix><NAME>` value onto `<NAME>` in place.
///
/// Never fails: an empty prefix, an empty mapping, unset values and
/// colliding targets are all ordinary input.
pub fn apply_prefixed_overrides<S>(env: &mut EnvMap, prefix: &str, sink: &mut S)
where
    S: OverrideSink + ?Sized,
{
    let snapshot = env.snapshot();
    trace!(prefix, entries = snapshot.len(), "scanning for prefixed overrides");

    let mut count = 0usize;
    for (key, value) in &snapshot {
        let Some(target_key) = key.strip_prefix(prefix) else {
            continue;
        };
        let Some(value) = value else {
            continue;
        };

        let previous = if env.is_set(target_key) {
            Previous::Existing
        } else {
            Previous::New
        };
        env.set(target_key, value.as_str());
        count += 1;

        sink.overridden(&OverrideEvent::new(target_key, previous, value));
    }

    if count > 0 {
        sink.applied(count);
    }
}

/// Applies [`DEFAULT_PREFIX`] overrides, reporting to stdout.
pub fn apply_default(env: &mut EnvMap) {
    apply_prefixed_overrides(env, DEFAULT_PREFIX, &mut WriterSink::stdout());
}

/// A configured override pass.
///
/// ```
/// use envoverlay::core::env::container::EnvMap;
/// use envoverlay::overlay::Overlay;
/// use envoverlay::overlay::sink::MemorySink;
///
/// let mut env = EnvMap::from_vars([("SHADOW_HOME", "/srv")]);
/// let mut sink = MemorySink::new();
/// Overlay::builder().prefix("SHADOW_").build().apply(&mut env, &mut sink);
/// assert_eq!(env.get("HOME"), Some("/srv"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Overlay {
    #[builder(into, default = DEFAULT_PREFIX.to_string())]
    prefix: String,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Overlay {
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Applies overrides to a caller-owned mapping.
    pub fn apply<S>(&self, env: &mut EnvMap, sink: &mut S)
    where
        S: OverrideSink + ?Sized,
    {
        apply_prefixed_overrides(env, &self.prefix, sink);
    }

    /// Applies overrides to a fresh capture of the process environment.
    ///
    /// The process environment itself is left untouched; the returned mapping
    /// is what a child process should receive.
    pub fn apply_to_current<S>(&self, sink: &mut S) -> EnvMap
    where
        S: OverrideSink + ?Sized,
    {
        let mut env = current_env();
        self.apply(&mut env, sink);
        env
    }

    /// Applies overrides to the process environment itself.
    ///
    /// The environment is read at call time. Every target whose value changed
    /// is written back; targets the operating system cannot hold (such as the
    /// empty key produced by a variable named exactly like the prefix) are
    /// skipped with a warning.
    ///
    /// # Safety
    ///
    /// Writes to the process environment. The caller must ensure no other
    /// thread reads or writes the environment for the duration of the call,
    /// which in practice means calling it before any threads are spawned.
    pub unsafe fn apply_to_process_env<S>(&self, sink: &mut S)
    where
        S: OverrideSink + ?Sized,
    {
        let before = current_env();
        let mut after = before.clone();
        self.apply(&mut after, sink);

        for (key, value) in after.defined() {
            if before.get(key) == Some(value) {
                continue;
            }
            if !is_representable(key, value) {
                warn!(key, "cannot export override to the process environment, skipped");
                continue;
            }
            // SAFETY: exclusive access to the environment is guaranteed by the caller.
            unsafe { std::env::set_var(key, value) };
        }
    }
}
