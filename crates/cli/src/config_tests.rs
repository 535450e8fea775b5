// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use std::io::Write as _;

#[test]
fn test_defaults_match_capture_conventions() {
    let config = ViewConfig::default();
    assert_eq!(config.marker, DEFAULT_MARKER);
    assert_eq!(config.closer, ')');
    assert_eq!(config.wrap_width, 30);
    assert_eq!(config.indent, "\t\t");
    assert_eq!(config.formatters, vec!["black", "autopep8", "yapf"]);
    assert!(config.highlighter.is_none());
    assert_eq!(config.full_refresh_interval, 10);
    assert_eq!(config.max_content_size, 1_000_000);
}

#[test]
fn test_load_or_default_without_path() {
    let config = ViewConfig::load_or_default(None).unwrap();
    assert_eq!(config.wrap_width, 30);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config: ViewConfig = toml::from_str(
        r#"
wrap_width = 24
indent = "    "
"#,
    )
    .unwrap();
    assert_eq!(config.wrap_width, 24);
    assert_eq!(config.indent, "    ");
    assert_eq!(config.marker, DEFAULT_MARKER);
    assert_eq!(config.closer, ')');
}

#[test]
fn test_full_file() {
    let config: ViewConfig = toml::from_str(
        r#"
marker = 'run\("'
closer = "]"
wrap_width = 40
indent = "  "
formatters = ["black"]
highlighter = "bat"
full_refresh_interval = 5
max_content_size = 4096
"#,
    )
    .unwrap();
    assert_eq!(config.marker, "run\\(\"");
    assert_eq!(config.closer, ']');
    assert_eq!(config.formatters, vec!["black"]);
    assert_eq!(config.highlighter.as_deref(), Some("bat"));
    assert_eq!(config.full_refresh_interval, 5);
    assert_eq!(config.max_content_size, 4096);
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<ViewConfig, _> = toml::from_str("mystery = true");
    assert!(result.is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wrap_width = 12").unwrap();
    let config = ViewConfig::load(file.path()).unwrap();
    assert_eq!(config.wrap_width, 12);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = ViewConfig::load(std::path::Path::new("/nonexistent/codepane.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wrap_width = [not valid").unwrap();
    let result = ViewConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
