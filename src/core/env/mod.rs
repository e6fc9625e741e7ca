// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvMap (insertion-ordered, Option<String> values)
//! Sources: current_env(), EnvMap::from_vars(), FromIterator
//! Ops: get/set/unset/remove, iter/defined/snapshot
//! ```
//!
//! - **Case-sensitive keys**: prefixes are matched byte for byte
//! - **UTF-8 internal**: non-UTF-8 process entries are converted lossily

pub mod container;


/// Captures the current process environment.
///
/// Read at call time, never cached, so later changes to the process
/// environment are visible to the next capture.
#[must_use]
pub fn current_env() -> container::EnvMap {
    container::EnvMap::from_vars(std::env::vars_os().map(|(k, v)| {
        (
            k.to_string_lossy().into_owned(),
            v.to_string_lossy().into_owned(),
        )
    }))
}

/// Returns true if the operating system can hold this variable.
///
/// The mapping itself accepts any key (including the empty key), but process
/// environments reject empty keys, `=` in keys, and NUL anywhere.
#[must_use]
pub fn is_representable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}
