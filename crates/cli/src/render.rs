// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot render modes: view, pretty, code, and save.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::capture::Snapshot;
use crate::pipeline::Pipeline;

/// Rewrite the capture once and print it.
pub fn view<W: Write>(writer: &mut W, pipeline: &Pipeline, snapshot: &Snapshot) -> Result<()> {
    writeln!(writer, "{}", pipeline.process(snapshot))?;
    Ok(())
}

/// Print each code block in a framed box with a banner.
pub fn pretty<W: Write>(writer: &mut W, pipeline: &Pipeline, snapshot: &Snapshot) -> Result<()> {
    writeln!(writer, "{}", "═".repeat(60))?;
    writeln!(writer, "         Agent Output (Formatted)")?;
    writeln!(writer, "{}", "═".repeat(60))?;
    writeln!(writer)?;

    let blocks = pipeline.extract(&snapshot.plain);
    if blocks.is_empty() {
        writeln!(writer, "No code blocks found")?;
        return Ok(());
    }

    for (i, code) in blocks.iter().enumerate() {
        let n = i + 1;
        let fill = 45usize.saturating_sub(n.to_string().len());
        writeln!(writer, "┌─── Code Block {} {}", n, "─".repeat(fill))?;
        writeln!(writer, "│")?;
        for line in pipeline.highlight(code).split('\n') {
            writeln!(writer, "│ {}", line)?;
        }
        writeln!(writer, "│")?;
        writeln!(writer, "└{}", "─".repeat(55))?;
        writeln!(writer)?;
    }

    Ok(())
}

/// Print only the code blocks, one heading each.
pub fn code_only<W: Write>(writer: &mut W, pipeline: &Pipeline, snapshot: &Snapshot) -> Result<()> {
    for (i, code) in pipeline.extract(&snapshot.plain).iter().enumerate() {
        writeln!(writer, "### Code Block {} ###", i + 1)?;
        writeln!(writer, "{}", pipeline.highlight(code))?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Default save-mode file name, timestamped in local time.
pub fn default_save_path() -> PathBuf {
    PathBuf::from(format!(
        "codepane-{}.txt",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Write the rewritten capture to a file, returning the path written.
///
/// Save mode runs the pipeline with highlighting already disabled by the
/// caller so the dump stays plain text.
pub fn save(pipeline: &Pipeline, snapshot: &Snapshot, path: &Path) -> Result<PathBuf> {
    let processed = pipeline.process(snapshot);
    std::fs::write(path, processed)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
