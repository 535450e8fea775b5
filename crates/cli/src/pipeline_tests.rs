// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::format::FormatError;

struct Tagging;

impl Formatter for Tagging {
    fn name(&self) -> &str {
        "tagging"
    }
    fn format(&self, code: &str) -> Result<String, FormatError> {
        Ok(format!("F[{}]", code))
    }
}

struct Rejecting;

impl Formatter for Rejecting {
    fn name(&self) -> &str {
        "rejecting"
    }
    fn format(&self, _code: &str) -> Result<String, FormatError> {
        Err(FormatError::Rejected {
            name: "rejecting".to_string(),
            stderr: "cannot parse".to_string(),
        })
    }
}

struct Wrapping;

impl Highlighter for Wrapping {
    fn highlight(&self, code: &str) -> String {
        format!("\x1b[35m{}\x1b[0m", code)
    }
}

fn snapshot(colored: &str) -> Snapshot {
    Snapshot::from_colored(colored.to_string())
}

// =============================================================================
// process
// =============================================================================

#[test]
fn test_process_without_blocks_is_identity() {
    let pipeline = Pipeline::new(&ViewConfig::default(), false, false).unwrap();
    let snap = snapshot("\x1b[32mnothing embedded\x1b[0m");
    assert_eq!(pipeline.process(&snap), snap.colored);
}

#[test]
fn test_process_applies_format_and_highlight() {
    let pipeline = Pipeline::with_collaborators(
        &ViewConfig::default(),
        vec![Box::new(Tagging)],
        Box::new(Wrapping),
    )
    .unwrap();
    let snap = snapshot("execute (MCP)(code: \"print(1)\")");
    let out = pipeline.process(&snap);
    assert!(out.contains("\x1b[35mF[print(1)]\x1b[0m"));
}

#[test]
fn test_process_with_toggles_off_keeps_decoded_code() {
    let pipeline = Pipeline::new(&ViewConfig::default(), false, false).unwrap();
    let snap = snapshot("execute (MCP)(code: \"a = 1\\nb = 2\")");
    let out = pipeline.process(&snap);
    assert!(out.contains("\n\t\ta = 1\n\t\tb = 2"));
}

#[test]
fn test_process_rejecting_formatter_falls_to_chain_tail() {
    let pipeline = Pipeline::with_collaborators(
        &ViewConfig::default(),
        vec![Box::new(Rejecting), Box::new(Tagging)],
        Box::new(Passthrough),
    )
    .unwrap();
    let snap = snapshot("execute (MCP)(code: \"x()\")");
    assert!(pipeline.process(&snap).contains("F[x()]"));
}

#[test]
fn test_process_preserves_surrounding_colors() {
    let pipeline = Pipeline::new(&ViewConfig::default(), false, false).unwrap();
    let snap = snapshot("\x1b[32mexecute (MCP)(code: \"print(1)\")\x1b[0m");
    let out = pipeline.process(&snap);
    assert!(out.starts_with("\x1b[32m"));
    assert!(out.ends_with("\x1b[0m"));
    assert!(out.contains("\t\tprint(1)"));
}

// =============================================================================
// extract + highlight
// =============================================================================

#[test]
fn test_extract_decodes_payloads() {
    let pipeline = Pipeline::new(&ViewConfig::default(), false, false).unwrap();
    let blocks = pipeline.extract("execute (MCP)(code: \"a\\nb\") execute (MCP)(code: \"c()\")");
    assert_eq!(blocks, vec!["a\nb".to_string(), "c()".to_string()]);
}

#[test]
fn test_extract_applies_formatting_when_enabled() {
    let pipeline = Pipeline::with_collaborators(
        &ViewConfig::default(),
        vec![Box::new(Tagging)],
        Box::new(Passthrough),
    )
    .unwrap();
    let blocks = pipeline.extract("execute (MCP)(code: \"y\")");
    assert_eq!(blocks, vec!["F[y]".to_string()]);
}

#[test]
fn test_highlight_respects_toggle() {
    let pipeline = Pipeline::new(&ViewConfig::default(), false, false).unwrap();
    assert_eq!(pipeline.highlight("code"), "code");
}

#[test]
fn test_bad_marker_pattern_is_config_error() {
    let config = ViewConfig {
        marker: "(unclosed".to_string(),
        ..ViewConfig::default()
    };
    assert!(Pipeline::new(&config, true, true).is_err());
}
