// envoverlay: Prefixed environment variable overrides
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::overlay::DEFAULT_PREFIX;
use crate::overlay::sink::SinkKind;
use std::io::Write as _;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.overlay.prefix, DEFAULT_PREFIX);
    assert_eq!(config.overlay.sink, SinkKind::Stdout);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
}

#[test]
fn test_empty_sources_yield_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = "debug"
log_file = "logs/envoverlay.log"

[overlay]
prefix = "SHADOW_"
sink = "tracing"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/envoverlay.log"))
    );
    assert_eq!(config.overlay.prefix, "SHADOW_");
    assert_eq!(config.overlay.sink, SinkKind::Tracing);
    assert_eq!(config.overlay().prefix(), "SHADOW_");
}

#[test]
fn test_config_accepts_empty_prefix() {
    let config = Config::parse("[overlay]\nprefix = \"\"\n").unwrap();
    assert_eq!(config.overlay.prefix, "");
}

#[test]
fn test_config_rejects_unknown_fields() {
    assert!(Config::parse("[overlay]\nprefixes = [\"A_\"]\n").is_err());
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn test_config_rejects_unknown_sink() {
    assert!(Config::parse("[overlay]\nsink = \"syslog\"\n").is_err());
}

#[test]
fn test_config_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_set_overrides_file_values() {
    let config = Config::builder()
        .add_toml_str("[overlay]\nprefix = \"FROM_FILE_\"\n")
        .set("overlay.prefix", "FROM_SET_")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.overlay.prefix, "FROM_SET_");
}

#[test]
fn test_set_assignment() {
    let config = Config::builder()
        .set_assignment("overlay.sink=stderr")
        .unwrap()
        .set_assignment("overlay.prefix=A=B_")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.overlay.sink, SinkKind::Stderr);
    assert_eq!(config.overlay.prefix, "A=B_");
}

#[test]
fn test_set_assignment_rejects_malformed() {
    for bad in ["overlay.prefix", "=value"] {
        let err = Config::builder().set_assignment(bad).err().unwrap();
        assert!(
            matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::ParseError { .. })
            ),
            "{bad}: {err}"
        );
    }
}

#[test]
fn test_missing_required_file() {
    let err = Config::from_file("definitely/not/here/envoverlay.toml").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(_))
    ));
}

#[test]
fn test_later_files_win() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    std::fs::File::create(&first)
        .unwrap()
        .write_all(b"[overlay]\nprefix = \"FIRST_\"\nsink = \"stderr\"\n")
        .unwrap();
    std::fs::File::create(&second)
        .unwrap()
        .write_all(b"[overlay]\nprefix = \"SECOND_\"\n")
        .unwrap();

    let loader = Config::builder()
        .add_toml_file(&first)
        .add_toml_file(&second)
        .add_toml_file_optional(dir.path().join("absent.toml"));
    assert_eq!(loader.loaded_files().len(), 2);
    assert!(loader.format_loaded_files()[0].starts_with("1. [file] "));

    let config = loader.build().unwrap();
    assert_eq!(config.overlay.prefix, "SECOND_");
    assert_eq!(config.overlay.sink, SinkKind::Stderr);
}

#[test]
fn test_format_options() {
    let config = Config::parse("[overlay]\nprefix = \"SHADOW_\"\n").unwrap();
    insta::assert_snapshot!(
        config.format_options().join("\n"),
        @r#"
    global.file_log_level   = 5
    global.output_log_level = 3
    overlay.prefix          = "SHADOW_"
    overlay.sink            = stdout
    "#
    );
}
