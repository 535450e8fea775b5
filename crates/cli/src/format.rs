// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Code formatter collaborators.
//!
//! Formatters are strategies with a uniform `(text) -> Result<text>`
//! contract, tried in preference order. External tools (black, autopep8,
//! yapf) run as subprocesses over piped stdin/stdout; any of them being
//! missing or rejecting the input just falls through to the next entry.
//! The chain ends at [`BasicFormatter`], which cannot fail.
//!
//! Subprocesses run synchronously: the rewrite pipeline never suspends
//! mid-pass, the only await points in the program are the capture call
//! and the poll sleep.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Error from a single formatter strategy. Never fatal to a pass.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("formatter '{name}' could not be run: {source}")]
    Unavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("formatter '{name}' rejected the input: {stderr}")]
    Rejected { name: String, stderr: String },
}

/// A code formatting strategy.
pub trait Formatter {
    /// Name for diagnostics.
    fn name(&self) -> &str;
    /// Reformat the code, or signal that this strategy cannot.
    fn format(&self, code: &str) -> Result<String, FormatError>;
}

/// External formatter invoked with code on stdin, reformatted code on
/// stdout.
pub struct CommandFormatter {
    name: String,
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The known formatters by short name, argv included.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Self::new("black", "black", &["--quiet", "-"])),
            "autopep8" => Some(Self::new(
                "autopep8",
                "autopep8",
                &["--max-line-length", "88", "-"],
            )),
            "yapf" => Some(Self::new("yapf", "yapf", &[])),
            _ => None,
        }
    }
}

impl Formatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self, code: &str) -> Result<String, FormatError> {
        let unavailable = |source| FormatError::Unavailable {
            name: self.name.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(unavailable)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(code.as_bytes()).map_err(unavailable)?;
            // Close stdin to signal EOF
        }

        let output = child.wait_with_output().map_err(unavailable)?;
        if !output.status.success() {
            return Err(FormatError::Rejected {
                name: self.name.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let formatted = String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string();
        Ok(formatted)
    }
}

/// Heuristic fallback used when no external formatter is available.
///
/// Re-indents by tracking block openers and dedent keywords. Crude next
/// to a real formatter, but it never fails and it untangles the one-line
/// soup a decoded payload often is.
pub struct BasicFormatter;

const DEDENT_STARTS: &[&str] = &[
    "else:", "elif ", "except:", "except ", "finally:", ")", "]", "}",
];

const BLOCK_KEYWORDS: &[&str] = &[
    "if ", "for ", "while ", "def ", "class ", "with ", "try:",
];

impl Formatter for BasicFormatter {
    fn name(&self) -> &str {
        "basic"
    }

    fn format(&self, code: &str) -> Result<String, FormatError> {
        let mut lines = Vec::new();
        let mut indent_level: usize = 0;

        for line in code.trim().split('\n') {
            let stripped = line.trim();

            if stripped.is_empty() {
                lines.push(String::new());
                continue;
            }

            if DEDENT_STARTS.iter().any(|kw| stripped.starts_with(kw)) {
                indent_level = indent_level.saturating_sub(1);
            }

            lines.push(format!("{}{}", "    ".repeat(indent_level), stripped));

            if stripped.ends_with(':')
                || stripped.ends_with('(')
                || stripped.ends_with('[')
                || stripped.ends_with('{')
            {
                indent_level += 1;
            }

            if stripped.ends_with('\\') {
                indent_level += 1;
            } else if indent_level > 0
                && !stripped.ends_with([':', '(', '[', '{'])
                && !BLOCK_KEYWORDS.iter().any(|kw| stripped.starts_with(kw))
            {
                indent_level = indent_level.saturating_sub(1);
            }
        }

        Ok(lines.join("\n"))
    }
}

/// Build the configured strategy chain; unknown names are skipped.
pub fn build_chain(names: &[String]) -> Vec<Box<dyn Formatter>> {
    let mut chain: Vec<Box<dyn Formatter>> = names
        .iter()
        .filter_map(|n| CommandFormatter::by_name(n))
        .map(|f| Box::new(f) as Box<dyn Formatter>)
        .collect();
    chain.push(Box::new(BasicFormatter));
    chain
}

/// Try each formatter in order, falling through on error.
///
/// The chain is expected to end in an infallible strategy; if every entry
/// somehow fails the input is returned unchanged.
pub fn format_chain(formatters: &[Box<dyn Formatter>], code: &str) -> String {
    for formatter in formatters {
        match formatter.format(code) {
            Ok(formatted) => return formatted,
            Err(_) => continue,
        }
    }
    code.to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
