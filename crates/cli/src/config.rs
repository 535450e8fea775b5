// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View configuration loaded from an optional TOML file.
//!
//! Every field has a default matching the conventions of the captured
//! agent output, so running with no config file works out of the box.
//! CLI flags override the toggles; the file covers the block syntax and
//! rendering knobs that rarely change.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use codepane_rewrite::{DEFAULT_CLOSER, DEFAULT_MARKER, DEFAULT_WRAP_WIDTH};

/// Error loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_closer() -> char {
    DEFAULT_CLOSER
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_indent() -> String {
    "\t\t".to_string()
}

fn default_formatters() -> Vec<String> {
    vec![
        "black".to_string(),
        "autopep8".to_string(),
        "yapf".to_string(),
    ]
}

fn default_full_refresh_interval() -> u32 {
    10
}

fn default_max_content_size() -> usize {
    1_000_000
}

/// Process-wide view configuration. Read-only during a pipeline run.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    /// Marker regex introducing a code payload; the match ends at the
    /// opening quote.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Character that follows the closing quote.
    #[serde(default = "default_closer")]
    pub closer: char,

    /// Width of the space run the pane inserts when wrapping a line.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Indentation inserted after every line break of a rewritten block.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// External formatters tried in order before the built-in fallback.
    #[serde(default = "default_formatters")]
    pub formatters: Vec<String>,

    /// External highlighter command; None uses pygmentize.
    #[serde(default)]
    pub highlighter: Option<String>,

    /// Stream mode: force a full screen clear every N updates.
    #[serde(default = "default_full_refresh_interval")]
    pub full_refresh_interval: u32,

    /// Stream mode: force a full clear when the capture exceeds this size.
    #[serde(default = "default_max_content_size")]
    pub max_content_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            closer: default_closer(),
            wrap_width: default_wrap_width(),
            indent: default_indent(),
            formatters: default_formatters(),
            highlighter: None,
            full_refresh_interval: default_full_refresh_interval(),
            max_content_size: default_max_content_size(),
        }
    }
}

impl ViewConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from the given path, or defaults when no path is set.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
