// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Rewrite the capture once and print it.
    View,
    /// Print each code block in a framed box.
    Pretty,
    /// Print only the decoded code blocks.
    Code,
    /// Poll the pane and re-render continuously.
    Stream,
    /// Re-render only when the pane content changes.
    Follow,
    /// Write the rewritten capture to a file.
    Save,
}

/// Live tmux pane viewer that reformats embedded code blocks
#[derive(Parser, Clone, Debug)]
#[command(name = "codepane", version, about = "Reformat code blocks in a tmux pane")]
pub struct Cli {
    /// Display mode
    #[arg(value_enum, default_value = "view")]
    pub mode: Mode,

    /// Tmux session name
    #[arg(short, long, default_value = "claude-code")]
    pub session: String,

    /// Output file for save mode
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Refresh interval in seconds for stream and follow modes
    #[arg(short, long, default_value = "1.0")]
    pub interval: f64,

    /// Disable ANSI colors in the capture
    #[arg(long = "no-colors", action = ArgAction::SetFalse)]
    pub colors: bool,

    /// Disable syntax highlighting of code blocks
    #[arg(long = "no-highlight", action = ArgAction::SetFalse)]
    pub highlight: bool,

    /// Disable code reformatting
    #[arg(long = "no-format", action = ArgAction::SetFalse)]
    pub format: bool,

    /// Config file (TOML)
    #[arg(long, env = "CODEPANE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
