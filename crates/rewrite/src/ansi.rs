// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequence stripping and offset mapping.
//!
//! A tmux capture taken with `-e` interleaves terminal escape sequences
//! with visible text. Block scanning needs the stripped view, while the
//! final splice happens in the colored view, so every plain-text offset
//! must translate back to the colored text. [`PositionMap`] is that
//! translation table.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for recognized terminal escape sequences: ESC followed by either a
/// single final byte, or a CSI parameter sequence ending in a final byte.
///
/// This is a compile-time constant regex pattern that is guaranteed to be valid,
/// so the expect is safe.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("ANSI regex pattern is invalid")
});

/// Strip all recognized escape sequences, returning plain text.
pub fn strip_ansi(input: &str) -> String {
    ANSI_REGEX.replace_all(input, "").to_string()
}

/// Total mapping from plain-text byte offsets to colored-text byte offsets.
///
/// Built by walking the colored and plain texts in lock-step, skipping
/// escape sequences on the colored side. The table is monotonically
/// non-decreasing and covers `0..=plain.len()`; the final entry is the
/// end-of-text sentinel.
#[derive(Debug, Clone)]
pub struct PositionMap {
    table: Vec<usize>,
}

impl PositionMap {
    /// Build the map for a (colored, plain) pair.
    ///
    /// `plain` is expected to equal `strip_ansi(colored)`. When that
    /// invariant is violated by malformed escape sequences the walk
    /// stops aligning and the remaining entries clamp to the last colored
    /// position reached; the result is best-effort, never a panic.
    pub fn build(colored: &str, plain: &str) -> Self {
        let mut table = vec![0usize; plain.len() + 1];
        let colored_bytes = colored.as_bytes();
        let plain_bytes = plain.as_bytes();

        let mut sequences = ANSI_REGEX.find_iter(colored).peekable();
        let mut c = 0usize;
        let mut p = 0usize;

        while p < plain_bytes.len() && c < colored_bytes.len() {
            // Skip any escape sequence starting at the colored cursor.
            if let Some(m) = sequences.peek() {
                if m.start() == c {
                    c = m.end();
                    sequences.next();
                    continue;
                }
                // A sequence the 1:1 walk already stepped into is evidence
                // of misalignment; drop it and keep going.
                if m.start() < c {
                    sequences.next();
                    continue;
                }
            }
            if colored_bytes[c] != plain_bytes[p] {
                // Misaligned input. Stop here and clamp the rest.
                break;
            }
            table[p] = c;
            p += 1;
            c += 1;
        }

        // End-of-text sentinel plus clamping for any unaligned tail.
        // Trailing escape sequences stay after the sentinel so splices at
        // end-of-text leave them in place.
        while p <= plain_bytes.len() {
            table[p] = c;
            p += 1;
        }

        PositionMap { table }
    }

    /// Translate a plain-text offset to a colored-text offset.
    ///
    /// Out-of-range offsets clamp to the end-of-text sentinel.
    pub fn get(&self, plain_offset: usize) -> usize {
        match self.table.get(plain_offset) {
            Some(&c) => c,
            None => self.table.last().copied().unwrap_or(0),
        }
    }

    /// Number of entries in the table (plain length + 1).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True only for a map over empty plain text.
    pub fn is_empty(&self) -> bool {
        // The table always holds at least the sentinel.
        self.table.len() <= 1
    }

    /// Whether every entry is >= its predecessor.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
#[path = "ansi_tests.rs"]
mod tests;
