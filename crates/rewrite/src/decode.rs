// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape token decoding and wrap artifact removal.
//!
//! Payloads arrive with literal two-character escape tokens (`\n` as
//! backslash + n) and with artifacts left by the pane's fixed-width line
//! wrapping: a real newline followed by a fixed run of spaces. Decoding
//! replaces the tokens with sentinels first, then deletes the artifacts,
//! then materializes the sentinels, so artifact removal can never touch
//! content that used to be an escaped newline.
//!
//! Not idempotent: decoding twice would eat source text that legitimately
//! spells out `\n`. Callers invoke this exactly once per raw payload.

/// Width of the space run the capture inserts when wrapping a line.
pub const DEFAULT_WRAP_WIDTH: usize = 30;

// Private-use-area sentinels; cannot occur in printable source code.
const NEWLINE_SENTINEL: char = '\u{e000}';
const TAB_SENTINEL: char = '\u{e001}';
const RETURN_SENTINEL: char = '\u{e002}';

/// Decode a raw payload into literal code text.
pub fn decode(raw: &str, wrap_width: usize) -> String {
    let mut code = raw
        .replace("\\n", &NEWLINE_SENTINEL.to_string())
        .replace("\\t", &TAB_SENTINEL.to_string())
        .replace("\\r", &RETURN_SENTINEL.to_string());

    // Wrap artifacts: the capture broke a long logical line into a real
    // newline plus a run of leading spaces. Both go.
    code = code.replace('\n', "");
    if wrap_width > 0 {
        code = code.replace(&" ".repeat(wrap_width), "");
    }

    code.replace(NEWLINE_SENTINEL, "\n")
        .replace(TAB_SENTINEL, "\t")
        .replace(RETURN_SENTINEL, "\r")
}

/// Replace escaped double quotes with literal quotes.
///
/// Kept out of [`decode`] so its token set stays exactly the three control
/// characters; the rewriter applies this right after decoding.
pub fn unescape_quotes(code: &str) -> String {
    code.replace("\\\"", "\"")
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
