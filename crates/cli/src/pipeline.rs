// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pass orchestration.
//!
//! A [`Pipeline`] carries everything one rewrite pass needs: the block
//! syntax, the rewrite options, the formatter chain, the highlighter, and
//! the two toggles. The toggles are plain fields threaded from the CLI,
//! not ambient state, so tests can flip them freely.

use anyhow::Result;

use codepane_rewrite::{decode, rewrite, unescape_quotes, BlockSyntax, RewriteOptions};

use crate::capture::Snapshot;
use crate::config::ViewConfig;
use crate::format::{self, Formatter};
use crate::highlight::{CommandHighlighter, Highlighter, Passthrough};

/// Configured processing pipeline for one run of the program.
pub struct Pipeline {
    syntax: BlockSyntax,
    opts: RewriteOptions,
    formatters: Vec<Box<dyn Formatter>>,
    highlighter: Box<dyn Highlighter>,
    pub formatting: bool,
    pub highlighting: bool,
}

impl Pipeline {
    /// Build from configuration and the CLI toggles.
    pub fn new(config: &ViewConfig, formatting: bool, highlighting: bool) -> Result<Self> {
        let syntax = BlockSyntax::new(&config.marker, config.closer)?;
        let opts = RewriteOptions {
            indent: config.indent.clone(),
            wrap_width: config.wrap_width,
        };

        let highlighter: Box<dyn Highlighter> = if highlighting {
            match &config.highlighter {
                Some(program) => Box::new(CommandHighlighter::new(program, &[])),
                None => Box::new(CommandHighlighter::pygmentize()),
            }
        } else {
            Box::new(Passthrough)
        };

        Ok(Self {
            syntax,
            opts,
            formatters: format::build_chain(&config.formatters),
            highlighter,
            formatting,
            highlighting,
        })
    }

    /// Pipeline with the given strategies injected, for tests.
    #[cfg(test)]
    pub fn with_collaborators(
        config: &ViewConfig,
        formatters: Vec<Box<dyn Formatter>>,
        highlighter: Box<dyn Highlighter>,
    ) -> Result<Self> {
        let syntax = BlockSyntax::new(&config.marker, config.closer)?;
        let opts = RewriteOptions {
            indent: config.indent.clone(),
            wrap_width: config.wrap_width,
        };
        Ok(Self {
            syntax,
            opts,
            formatters,
            highlighter,
            formatting: true,
            highlighting: true,
        })
    }

    /// Run one rewrite pass over a snapshot.
    pub fn process(&self, snapshot: &Snapshot) -> String {
        rewrite(
            &snapshot.colored,
            &snapshot.plain,
            &self.syntax,
            &self.opts,
            &mut |code| {
                let formatted = if self.formatting {
                    format::format_chain(&self.formatters, code)
                } else {
                    code.to_string()
                };
                Ok(if self.highlighting {
                    self.highlighter.highlight(&formatted)
                } else {
                    formatted
                })
            },
        )
    }

    /// Decoded (and optionally formatted) payloads, for the block-only
    /// render modes.
    pub fn extract(&self, plain: &str) -> Vec<String> {
        self.syntax
            .scan(plain)
            .iter()
            .map(|block| {
                let code = unescape_quotes(&decode(&block.payload, self.opts.wrap_width));
                if self.formatting {
                    format::format_chain(&self.formatters, &code)
                } else {
                    code
                }
            })
            .collect()
    }

    /// Highlight one already-extracted code block.
    pub fn highlight(&self, code: &str) -> String {
        if self.highlighting {
            self.highlighter.highlight(code)
        } else {
            code.to_string()
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
