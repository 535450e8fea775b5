// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::config::ViewConfig;

fn pipeline() -> Pipeline {
    // Toggles off: render tests exercise layout, not collaborators.
    Pipeline::new(&ViewConfig::default(), false, false).unwrap()
}

fn snapshot(colored: &str) -> Snapshot {
    Snapshot::from_colored(colored.to_string())
}

fn render_to_string<F>(render: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buf = Vec::new();
    render(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// =============================================================================
// view
// =============================================================================

#[test]
fn test_view_prints_rewritten_capture() {
    let pipeline = pipeline();
    let snap = snapshot("execute (MCP)(code: \"print(1)\")");
    let out = render_to_string(|w| view(w, &pipeline, &snap));
    assert!(out.contains("\t\tprint(1)"));
}

#[test]
fn test_view_without_blocks_prints_capture() {
    let pipeline = pipeline();
    let snap = snapshot("plain pane text");
    let out = render_to_string(|w| view(w, &pipeline, &snap));
    assert_eq!(out, "plain pane text\n");
}

// =============================================================================
// pretty
// =============================================================================

#[test]
fn test_pretty_frames_each_block() {
    let pipeline = pipeline();
    let snap = snapshot("execute (MCP)(code: \"a()\") execute (MCP)(code: \"b()\")");
    let out = render_to_string(|w| pretty(w, &pipeline, &snap));
    assert!(out.contains("┌─── Code Block 1 "));
    assert!(out.contains("┌─── Code Block 2 "));
    assert!(out.contains("│ a()"));
    assert!(out.contains("│ b()"));
    assert!(out.contains("└"));
}

#[test]
fn test_pretty_reports_empty_capture() {
    let pipeline = pipeline();
    let snap = snapshot("nothing embedded");
    let out = render_to_string(|w| pretty(w, &pipeline, &snap));
    assert!(out.contains("No code blocks found"));
}

#[test]
fn test_pretty_multiline_block_one_prefix_per_line() {
    let pipeline = pipeline();
    let snap = snapshot("execute (MCP)(code: \"a = 1\\nb = 2\")");
    let out = render_to_string(|w| pretty(w, &pipeline, &snap));
    assert!(out.contains("│ a = 1\n│ b = 2"));
}

// =============================================================================
// code
// =============================================================================

#[test]
fn test_code_only_lists_blocks() {
    let pipeline = pipeline();
    let snap = snapshot("execute (MCP)(code: \"x = 1\")");
    let out = render_to_string(|w| code_only(w, &pipeline, &snap));
    assert!(out.contains("### Code Block 1 ###"));
    assert!(out.contains("x = 1"));
}

#[test]
fn test_code_only_empty_capture_prints_nothing() {
    let pipeline = pipeline();
    let snap = snapshot("no blocks");
    let out = render_to_string(|w| code_only(w, &pipeline, &snap));
    assert!(out.is_empty());
}

// =============================================================================
// save
// =============================================================================

#[test]
fn test_save_writes_processed_capture() {
    let pipeline = pipeline();
    let snap = snapshot("execute (MCP)(code: \"print(1)\")");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.txt");

    let written = save(&pipeline, &snap, &path).unwrap();

    assert_eq!(written, path);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\t\tprint(1)"));
}

#[test]
fn test_save_into_missing_directory_errors() {
    let pipeline = pipeline();
    let snap = snapshot("x");
    let result = save(&pipeline, &snap, Path::new("/nonexistent/dir/dump.txt"));
    assert!(result.is_err());
}

#[test]
fn test_default_save_path_shape() {
    let path = default_save_path();
    let name = path.to_string_lossy().to_string();
    assert!(name.starts_with("codepane-"));
    assert!(name.ends_with(".txt"));
}
