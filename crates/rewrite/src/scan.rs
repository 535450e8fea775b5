// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted code block scanner.
//!
//! Finds every `execute (MCP)(code: "…")` style block in plain text. The
//! marker pattern locates the opening quote; from there a character walk
//! with explicit escape tracking finds the matching closing delimiter.
//! A quote that is not immediately followed by the closer character is
//! ordinary payload content, which tolerates quotes inside string literals
//! within the embedded code.

use regex::Regex;
use thiserror::Error;

/// Default marker pattern. The match ends at the opening quote.
pub const DEFAULT_MARKER: &str = r#"execute \(MCP\)\(code:\s*""#;

/// Default closer: the character that must follow the closing quote.
pub const DEFAULT_CLOSER: char = ')';

/// Error building a [`BlockSyntax`] from configuration.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// The configured marker pattern is not a valid regex.
    #[error("invalid marker pattern: {0}")]
    Marker(#[from] regex::Error),
}

/// One scanned block, with byte offsets into the plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Offset of the marker match start.
    pub start: usize,
    /// Offset just past the closing quote-closer pair (exclusive).
    pub end: usize,
    /// The marker text, from `start` up to and including the opening quote.
    pub prefix: String,
    /// The raw, still-escaped payload between the quotes.
    pub payload: String,
}

/// Escape tracking state for the payload walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    /// The previous character was a backslash not forming a recognized
    /// two-character escape; the next character is consumed verbatim.
    EscapePending,
}

/// The marker-and-delimiter convention a capture uses for code blocks.
#[derive(Debug, Clone)]
pub struct BlockSyntax {
    marker: Regex,
    closer: char,
}

impl BlockSyntax {
    /// Build from a marker regex (ending at the opening quote) and closer.
    pub fn new(marker: &str, closer: char) -> Result<Self, SyntaxError> {
        Ok(Self {
            marker: Regex::new(marker)?,
            closer,
        })
    }

    /// The closer character following the terminating quote.
    pub fn closer(&self) -> char {
        self.closer
    }

    /// Scan plain text for blocks, in ascending non-overlapping order.
    ///
    /// A marker with no valid terminator before end-of-text is abandoned
    /// and the search resumes just past the marker match, so a dangling
    /// block never hides later complete ones.
    pub fn scan(&self, plain: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut pos = 0;

        while let Some(m) = self.marker.find_at(plain, pos) {
            let start = m.start();
            let payload_start = m.end();

            match self.find_terminator(plain, payload_start) {
                Some(quote_at) => {
                    let end = quote_at + '"'.len_utf8() + self.closer.len_utf8();
                    blocks.push(Block {
                        start,
                        end,
                        prefix: plain[start..payload_start].to_string(),
                        payload: plain[payload_start..quote_at].to_string(),
                    });
                    pos = end;
                }
                None => {
                    // Unterminated: skip this marker, keep scanning.
                    pos = payload_start;
                }
            }
            if pos >= plain.len() {
                break;
            }
        }

        blocks
    }

    /// Walk the payload from `from`, returning the offset of the
    /// terminating quote, or None if the text ends first.
    fn find_terminator(&self, plain: &str, from: usize) -> Option<usize> {
        let mut state = ScanState::Normal;
        let mut chars = plain[from..].char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            match state {
                ScanState::EscapePending => {
                    // The escaped character is consumed verbatim.
                    state = ScanState::Normal;
                }
                ScanState::Normal => match ch {
                    '\\' => match chars.peek() {
                        Some(&(_, next)) if matches!(next, 'n' | 't' | 'r' | '"' | '\\') => {
                            // Recognized two-character escape, skip as a unit.
                            chars.next();
                        }
                        _ => {
                            // Lone backslash escapes whatever follows, if
                            // anything remains.
                            state = ScanState::EscapePending;
                        }
                    },
                    '"' => {
                        if let Some(&(_, next)) = chars.peek() {
                            if next == self.closer {
                                return Some(from + i);
                            }
                        }
                        // Quote inside the payload, not a terminator.
                    }
                    _ => {}
                },
            }
        }

        None
    }
}

impl Default for BlockSyntax {
    fn default() -> Self {
        Self {
            // SAFETY: DEFAULT_MARKER is a compile-time constant and is guaranteed to be valid
            #[allow(clippy::expect_used)]
            marker: Regex::new(DEFAULT_MARKER).expect("default marker pattern is invalid"),
            closer: DEFAULT_CLOSER,
        }
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
