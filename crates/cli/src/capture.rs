// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tmux pane capture collaborator.
//!
//! Shells out to `tmux capture-pane` for the full scrollback of a session.
//! Called once per poll iteration, so it must stay cheap and must never
//! leave the loop wedged: failures surface as [`CaptureError`] and the
//! caller decides whether to retry.

use thiserror::Error;
use tokio::process::Command;

use codepane_rewrite::strip_ansi;

/// One snapshot of the pane in both views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Capture with escape sequences intact.
    pub colored: String,
    /// The same capture with escape sequences stripped.
    pub plain: String,
}

impl Snapshot {
    /// Build the pair from a raw colored capture.
    pub fn from_colored(colored: String) -> Self {
        let plain = strip_ansi(&colored);
        Self { colored, plain }
    }
}

/// Error capturing the pane.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to run tmux: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("tmux capture-pane failed for session '{session}': {stderr}")]
    Tmux { session: String, stderr: String },
}

/// Capture the full scrollback of a tmux session.
///
/// `with_colors` adds `-e` so the capture keeps its escape sequences; the
/// plain view is stripped from the colored one either way, keeping the
/// two views aligned by construction.
pub async fn capture_pane(session: &str, with_colors: bool) -> Result<Snapshot, CaptureError> {
    let mut cmd = Command::new("tmux");
    cmd.args(["capture-pane", "-t", session, "-p", "-S", "-"]);
    if with_colors {
        cmd.arg("-e");
    }

    let output = cmd.output().await?;
    if !output.status.success() {
        return Err(CaptureError::Tmux {
            session: session.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let colored = String::from_utf8_lossy(&output.stdout).to_string();
    Ok(Snapshot::from_colored(colored))
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
