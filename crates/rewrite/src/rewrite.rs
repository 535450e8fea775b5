// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color-preserving block rewriter.
//!
//! Orchestrates the scanner, decoder, and position map: blocks are found
//! in the plain text, their payloads decoded and transformed, and the
//! results spliced into the colored text. Everything outside the scanned
//! spans is copied verbatim, escape sequences included.

use thiserror::Error;

use crate::ansi::PositionMap;
use crate::decode::{decode, unescape_quotes};
use crate::scan::BlockSyntax;

/// Error raised by a caller-supplied transform pipeline.
///
/// The rewriter never propagates this; a failed transform falls back to
/// the decoded payload so one bad block cannot abort the pass.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransformError(pub String);

/// Knobs for the rewrite pass.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Indentation inserted after every line break of a rewritten block.
    pub indent: String,
    /// Wrap artifact width passed to the decoder.
    pub wrap_width: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            indent: "\t\t".to_string(),
            wrap_width: crate::decode::DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Rewrite every scanned block in `colored`, returning the new text.
///
/// `plain` must be the escape-stripped form of `colored`. `transform` is
/// the caller's decode-downstream pipeline (reformat, highlight); it
/// receives decoded code and returns the replacement text. Blocks are
/// processed in descending start order so earlier offsets stay valid while
/// later spans are spliced.
///
/// Returns `colored` unchanged when no block matches. A block whose mapped
/// span does not land on valid boundaries in the colored text is left
/// untouched rather than corrupting the output.
pub fn rewrite(
    colored: &str,
    plain: &str,
    syntax: &BlockSyntax,
    opts: &RewriteOptions,
    transform: &mut dyn FnMut(&str) -> Result<String, TransformError>,
) -> String {
    let blocks = syntax.scan(plain);
    if blocks.is_empty() {
        return colored.to_string();
    }

    let map = PositionMap::build(colored, plain);
    let closing = format!("\"\n{}", syntax.closer());
    let mut result = colored.to_string();

    for block in blocks.iter().rev() {
        let decoded = unescape_quotes(&decode(&block.payload, opts.wrap_width));

        let transformed = match transform(&decoded) {
            Ok(t) => t,
            Err(_) => decoded.clone(),
        };

        let break_indent = format!("\n{}", opts.indent);
        let indented = transformed.split('\n').collect::<Vec<_>>().join(&break_indent);

        let colored_start = map.get(block.start);
        let colored_end = map.get(block.end);

        // The marker text may carry its own coloring; take the span of the
        // same byte length as the plain prefix so it is preserved.
        let prefix_end = colored_start + block.prefix.len();
        let colored_prefix = result
            .get(colored_start..prefix_end)
            .unwrap_or(block.prefix.as_str());

        let replacement = format!(
            "{}{}{}{}",
            colored_prefix, break_indent, indented, closing
        );

        match (result.get(..colored_start), result.get(colored_end..)) {
            (Some(head), Some(tail)) => {
                result = format!("{}{}{}", head, replacement, tail);
            }
            // Mapped span is not sliceable: the alignment invariant was
            // violated for this block, leave it as captured.
            _ => continue,
        }
    }

    result
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
