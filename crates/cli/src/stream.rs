// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live polling modes: stream and follow.
//!
//! Single-threaded and poll-driven: each iteration captures a snapshot,
//! runs the rewrite pass, and writes the result, then sleeps for the
//! configured interval. The only blocking points are the capture call and
//! the sleep. Signals are cooperative flags read at the top of the loop;
//! nothing is shared across iterations except the redraw state owned by
//! the loop itself.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use sha2::{Digest, Sha256};

use crate::capture::capture_pane;
use crate::config::ViewConfig;
use crate::output::print_warning;
use crate::pipeline::Pipeline;

/// How much of the capture head feeds the content fingerprint.
const FINGERPRINT_HEAD: usize = 1024;

/// Cooperative signal flags.
///
/// An interrupt ends the loop after the current iteration; a resize
/// forces a full redraw on the next iteration. Registration failures are
/// reported and degrade to default signal behavior.
pub struct Signals {
    interrupted: Arc<AtomicBool>,
    resized: Arc<AtomicBool>,
}

impl Signals {
    pub fn install() -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));
        let resized = Arc::new(AtomicBool::new(false));

        #[cfg(unix)]
        {
            if let Err(e) =
                signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))
            {
                print_warning(format_args!("Failed to register SIGINT handler: {}", e));
            }
            if let Err(e) =
                signal_hook::flag::register(signal_hook::consts::SIGWINCH, Arc::clone(&resized))
            {
                print_warning(format_args!("Failed to register SIGWINCH handler: {}", e));
            }
        }

        Self {
            interrupted,
            resized,
        }
    }

    pub fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Relaxed)
    }

    /// Read and clear the resize flag.
    pub fn take_resized(&self) -> bool {
        self.resized.swap(false, Ordering::Relaxed)
    }
}

/// Redraw bookkeeping owned by the loop.
pub struct RedrawState {
    update_counter: u32,
    last_fingerprint: Option<[u8; 32]>,
}

/// SHA-256 of the capture head. The head only changes when the scrollback
/// itself moves, which is exactly when an incremental repaint would smear.
fn fingerprint(plain: &str) -> [u8; 32] {
    let head = &plain.as_bytes()[..plain.len().min(FINGERPRINT_HEAD)];
    Sha256::digest(head).into()
}

impl RedrawState {
    pub fn new() -> Self {
        Self {
            update_counter: 0,
            last_fingerprint: None,
        }
    }

    /// Decide full vs incremental redraw for this iteration's capture.
    pub fn decide(&mut self, config: &ViewConfig, plain: &str, resized: bool) -> bool {
        self.update_counter += 1;

        let current = fingerprint(plain);
        let content_changed = self
            .last_fingerprint
            .map(|last| last != current)
            .unwrap_or(false);
        self.last_fingerprint = Some(current);

        let needs_full = self.update_counter >= config.full_refresh_interval
            || plain.len() > config.max_content_size
            || content_changed
            || resized;

        if needs_full {
            self.update_counter = 0;
        }
        needs_full
    }
}

impl Default for RedrawState {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores cursor visibility on every exit path.
struct CursorGuard;

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
    }
}

/// Poll the pane and re-render continuously until interrupted.
pub async fn stream(
    session: &str,
    pipeline: &Pipeline,
    config: &ViewConfig,
    interval: Duration,
    with_colors: bool,
) -> Result<()> {
    let signals = Signals::install();
    let _guard = CursorGuard;
    let mut state = RedrawState::new();
    let mut stdout = io::stdout();

    execute!(stdout, Hide, Clear(ClearType::All), MoveTo(0, 0))?;

    while !signals.interrupted() {
        let snapshot = match capture_pane(session, with_colors).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // Keep the last rendered frame visible and keep polling.
                print_warning(e);
                tokio::time::sleep(interval).await;
                continue;
            }
        };

        let full = state.decide(config, &snapshot.plain, signals.take_resized());
        if full {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        } else {
            execute!(stdout, MoveTo(0, 0))?;
        }

        write!(stdout, "{}", pipeline.process(&snapshot))?;
        execute!(stdout, Clear(ClearType::FromCursorDown))?;
        stdout.flush()?;

        tokio::time::sleep(interval).await;
    }

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(stdout, "Stopped streaming")?;
    Ok(())
}

/// Re-render only when the pane content changes.
pub async fn follow(
    session: &str,
    pipeline: &Pipeline,
    interval: Duration,
    with_colors: bool,
) -> Result<()> {
    let signals = Signals::install();
    let _guard = CursorGuard;
    let mut stdout = io::stdout();
    let mut last_plain = String::new();

    while !signals.interrupted() {
        match capture_pane(session, with_colors).await {
            Ok(snapshot) => {
                if snapshot.plain != last_plain {
                    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
                    writeln!(stdout, "{}", pipeline.process(&snapshot))?;
                    stdout.flush()?;
                    last_plain = snapshot.plain;
                }
            }
            Err(e) => print_warning(e),
        }
        tokio::time::sleep(interval).await;
    }

    writeln!(stdout, "Stopped following")?;
    Ok(())
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
