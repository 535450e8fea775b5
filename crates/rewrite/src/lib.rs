// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-aware code block scanner and ANSI-preserving rewriter.
//!
//! This crate holds the algorithmic core of codepane: it finds quoted code
//! payloads embedded in captured terminal text, decodes their escape
//! sequences, and splices transformed replacements back into the original
//! color-coded stream without disturbing surrounding escape sequences.
//!
//! The two views of a capture are the *colored* text (escape sequences
//! intact) and the *plain* text (escape sequences stripped). Scanning runs
//! on the plain text; splicing runs on the colored text through a total
//! offset map between the two.

mod ansi;
mod decode;
mod rewrite;
mod scan;

pub use ansi::{strip_ansi, PositionMap};
pub use decode::{decode, unescape_quotes, DEFAULT_WRAP_WIDTH};
pub use rewrite::{rewrite, RewriteOptions, TransformError};
pub use scan::{Block, BlockSyntax, SyntaxError, DEFAULT_CLOSER, DEFAULT_MARKER};
