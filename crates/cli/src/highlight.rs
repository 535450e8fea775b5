// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax highlighter collaborators.
//!
//! Highlighting is decoration, so the contract is infallible: a
//! highlighter returns the annotated text or, on any failure, the input
//! unchanged. The default is `pygmentize` run as a subprocess, matching
//! the formatter collaborators.

use regex::Regex;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

/// TODO-style comments get a yellow background so they stand out.
///
/// This is a compile-time constant regex pattern that is guaranteed to be valid,
/// so the expect is safe.
static TODO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"(?m)(#\s*(?:TODO|FIXME|NOTE|HACK|WARNING):.*)$")
        .expect("TODO regex pattern is invalid")
});

/// Function definitions get a bold face.
static DEF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\b(def\s+\w+)").expect("def regex pattern is invalid")
});

/// A syntax highlighting strategy. Failure returns the input unchanged.
pub trait Highlighter {
    fn highlight(&self, code: &str) -> String;
}

/// External highlighter invoked with code on stdin, annotated code on
/// stdout.
pub struct CommandHighlighter {
    program: String,
    args: Vec<String>,
}

impl CommandHighlighter {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The default pygments invocation with a 256-color formatter.
    pub fn pygmentize() -> Self {
        Self::new(
            "pygmentize",
            &["-l", "python", "-f", "terminal256", "-O", "style=monokai"],
        )
    }

    fn run(&self, code: &str) -> Option<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .ok()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(code.as_bytes()).ok()?;
            // Close stdin to signal EOF
        }

        let output = child.wait_with_output().ok()?;
        if !output.status.success() {
            return None;
        }

        Some(
            String::from_utf8_lossy(&output.stdout)
                .trim_end()
                .to_string(),
        )
    }
}

impl Highlighter for CommandHighlighter {
    fn highlight(&self, code: &str) -> String {
        match self.run(code) {
            Some(highlighted) => emphasize(&highlighted),
            None => code.to_string(),
        }
    }
}

/// No-op highlighter used when highlighting is disabled.
pub struct Passthrough;

impl Highlighter for Passthrough {
    fn highlight(&self, code: &str) -> String {
        code.to_string()
    }
}

/// Post-process highlighted code to emphasize noteworthy patterns.
pub fn emphasize(code: &str) -> String {
    let with_todos = TODO_REGEX.replace_all(code, "\x1b[43m\x1b[30m$1\x1b[0m");
    DEF_REGEX
        .replace_all(&with_todos, "\x1b[1m$1\x1b[0m")
        .to_string()
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod tests;
