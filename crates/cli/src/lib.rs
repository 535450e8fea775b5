// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! codepane
//!
//! Watches a tmux pane running an agent session, finds the
//! `execute (MCP)(code: "…")` blocks the agent prints, and re-renders the
//! pane with those blocks unwrapped, reformatted, and syntax highlighted,
//! leaving every other color escape sequence in place.
//!
//! The algorithmic core (scanner, decoder, position map, rewriter) lives
//! in the `codepane-rewrite` crate; this crate is the glue: tmux capture,
//! formatter and highlighter collaborators, render modes, and the live
//! polling loop.

pub mod capture;
pub mod cli;
pub mod config;
pub mod format;
pub mod highlight;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod stream;
