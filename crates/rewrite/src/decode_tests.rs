// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;

#[rstest]
#[case(r"a\nb", "a\nb")]
#[case(r"a\tb", "a\tb")]
#[case(r"a\rb", "a\rb")]
#[case(r"x\ny\tz", "x\ny\tz")]
#[case("plain", "plain")]
#[case("", "")]
fn test_escape_tokens_become_control_characters(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(decode(raw, DEFAULT_WRAP_WIDTH), expected);
}

#[test]
fn test_literal_newlines_are_wrap_artifacts() {
    // Real newlines in the raw payload come from pane wrapping, not code.
    assert_eq!(decode("def f():\n    pass", DEFAULT_WRAP_WIDTH), "def f():    pass");
}

#[test]
fn test_wrap_space_run_removed() {
    let raw = format!("import os{}import sys", " ".repeat(DEFAULT_WRAP_WIDTH));
    assert_eq!(decode(&raw, DEFAULT_WRAP_WIDTH), "import osimport sys");
}

#[test]
fn test_wrapped_line_with_escaped_newline() {
    // An escaped newline survives even when adjacent to a wrap artifact.
    let raw = format!("a\\n\n{}b", " ".repeat(DEFAULT_WRAP_WIDTH));
    assert_eq!(decode(&raw, DEFAULT_WRAP_WIDTH), "a\nb");
}

#[test]
fn test_decode_order_protects_escaped_newlines() {
    // The \n token must not be destroyed by literal-newline removal.
    assert_eq!(decode(r"a\nb", DEFAULT_WRAP_WIDTH), "a\nb");
    assert_eq!(decode("a\nb", DEFAULT_WRAP_WIDTH), "ab");
}

#[test]
fn test_shorter_space_runs_survive() {
    // Ordinary indentation is narrower than the wrap artifact width.
    assert_eq!(decode(r"if x:\n    y()", DEFAULT_WRAP_WIDTH), "if x:\n    y()");
}

#[test]
fn test_zero_wrap_width_disables_run_removal() {
    let raw = format!("a{}b", " ".repeat(4));
    assert_eq!(decode(&raw, 0), raw);
}

#[test]
fn test_custom_wrap_width() {
    let raw = format!("a{}b", " ".repeat(8));
    assert_eq!(decode(&raw, 8), "ab");
}

// =============================================================================
// unescape_quotes
// =============================================================================

#[test]
fn test_unescape_quotes() {
    assert_eq!(unescape_quotes(r#"print(\"x\")"#), r#"print("x")"#);
}

#[test]
fn test_unescape_quotes_no_op_without_escapes() {
    assert_eq!(unescape_quotes("print(1)"), "print(1)");
}
