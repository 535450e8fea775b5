// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! codepane binary entry point.

use std::io;
use std::time::Duration;

use clap::Parser;

use codepane::capture::capture_pane;
use codepane::cli::{Cli, Mode};
use codepane::config::ViewConfig;
use codepane::output::print_error;
use codepane::pipeline::Pipeline;
use codepane::{render, stream};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ViewConfig::load_or_default(cli.config.as_deref())?;

    // Save mode dumps plain text; highlighting stays off there.
    let highlighting = cli.highlight && cli.mode != Mode::Save;
    let pipeline = Pipeline::new(&config, cli.format, highlighting)?;
    let interval = Duration::from_secs_f64(cli.interval.max(0.1));

    match cli.mode {
        Mode::Stream => {
            stream::stream(&cli.session, &pipeline, &config, interval, cli.colors).await
        }
        Mode::Follow => stream::follow(&cli.session, &pipeline, interval, cli.colors).await,
        Mode::View => {
            let snapshot = capture_pane(&cli.session, cli.colors).await?;
            render::view(&mut io::stdout(), &pipeline, &snapshot)
        }
        Mode::Pretty => {
            let snapshot = capture_pane(&cli.session, cli.colors).await?;
            render::pretty(&mut io::stdout(), &pipeline, &snapshot)
        }
        Mode::Code => {
            let snapshot = capture_pane(&cli.session, cli.colors).await?;
            render::code_only(&mut io::stdout(), &pipeline, &snapshot)
        }
        Mode::Save => {
            let snapshot = capture_pane(&cli.session, cli.colors).await?;
            let path = cli.output.unwrap_or_else(render::default_save_path);
            let written = render::save(&pipeline, &snapshot, &path)?;
            println!("Saved to {}", written.display());
            Ok(())
        }
    }
}
