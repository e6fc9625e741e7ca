// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `envoverlay` binary.
//!
//! Every run gets a cleared environment and an empty working directory so no
//! stray `envoverlay.toml` or `ENVOVERLAY_*` variable leaks in.

use std::process::{Command, Output};

use tempfile::TempDir;

fn envoverlay(dir: &TempDir, vars: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_envoverlay"))
        .current_dir(dir.path())
        .env_clear()
        .envs(vars.iter().copied())
        .args(args)
        .output()
        .expect("envoverlay should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// print
// =============================================================================

#[test]
fn binary_print_reports_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[
            ("OPENAI_API_KEY", "sk-old"),
            ("VIBE_TOOLS_OPENAI_API_KEY", "sk-1234567890"),
            ("VIBE_TOOLS_NEW_VAR", "hello-world-value"),
        ],
        &["print"],
    );

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r"
    [VIBE_TOOLS_PREFIX] Overrode NEW_VAR: new -> hello-wo...
    [VIBE_TOOLS_PREFIX] Overrode OPENAI_API_KEY: existing -> sk-12345...
    [VIBE_TOOLS_PREFIX] Applied 2 prefixed environment variable overrides
    OPENAI_API_KEY=sk-1234567890
    VIBE_TOOLS_NEW_VAR=hello-world-value
    VIBE_TOOLS_OPENAI_API_KEY=sk-1234567890
    NEW_VAR=hello-world-value
    ");
}

#[test]
fn binary_print_json_with_stderr_sink() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[("VIBE_TOOLS_TOKEN", "abc")],
        &["--sink", "stderr", "print", "--format", "json"],
    );

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r#"
    {
      "VIBE_TOOLS_TOKEN": "abc",
      "TOKEN": "abc"
    }
    "#);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[VIBE_TOOLS_PREFIX] Overrode TOKEN: new -> abc..."));
}

#[test]
fn binary_print_without_shadows_is_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(&dir, &[("HOME", "/root")], &["print"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "HOME=/root\n");
}

// =============================================================================
// Configuration sources
// =============================================================================

#[test]
fn binary_prefix_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("envoverlay.toml"),
        "[overlay]\nprefix = \"CI_\"\n",
    )
    .unwrap();

    let output = envoverlay(&dir, &[("CI_HOME", "/ci")], &["print"]);
    assert!(stdout(&output).lines().any(|line| line == "HOME=/ci"));

    let output = envoverlay(&dir, &[("CI_HOME", "/ci")], &["--no-default-inis", "print"]);
    assert!(!stdout(&output).lines().any(|line| line == "HOME=/ci"));
}

#[test]
fn binary_prefix_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[("ENVOVERLAY_OVERLAY__PREFIX", "ALT_"), ("ALT_EDITOR", "vim")],
        &["print"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("EDITOR=vim\n"));
}

#[test]
fn binary_prefix_flag_beats_set() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[],
        &["--set", "overlay.prefix=FROM_SET_", "--prefix", "FROM_FLAG_", "options"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("overlay.prefix          = \"FROM_FLAG_\""));
}

#[test]
fn binary_missing_ini_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(&dir, &[], &["--ini", "missing.toml", "options"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.toml"));
}

#[test]
fn binary_no_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(&dir, &[], &[]);
    assert!(!output.status.success());
}

// =============================================================================
// exec
// =============================================================================

#[cfg(not(windows))]
#[test]
fn binary_exec_passes_overridden_env() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[
            ("PATH", "/usr/bin:/bin"),
            ("API_KEY", "old"),
            ("VIBE_TOOLS_API_KEY", "new-secret"),
        ],
        &["--sink", "stderr", "exec", "sh", "-c", "echo \"$API_KEY\""],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "new-secret\n");
}

#[cfg(not(windows))]
#[test]
fn binary_exec_resolves_program_on_overridden_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[("PATH", "/nonexistent"), ("VIBE_TOOLS_PATH", "/usr/bin:/bin")],
        &["--sink", "stderr", "exec", "sh", "-c", "exit 0"],
    );

    assert!(output.status.success());
}

#[cfg(not(windows))]
#[test]
fn binary_exec_propagates_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[("PATH", "/usr/bin:/bin")],
        &["exec", "sh", "-c", "exit 7"],
    );

    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn binary_exec_unknown_program_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = envoverlay(
        &dir,
        &[("PATH", "/usr/bin:/bin")],
        &["exec", "envoverlay-no-such-program-xyz"],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("envoverlay-no-such-program-xyz"));
}
