//! `icon-invert` CLI - turn `light/*.png` icons into `dark/*.png`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use icon_invert::{Config, Converter};

/// Invert the colours of every PNG in `./light` into `./dark`, keeping transparency.
#[derive(Parser, Debug)]
#[command(name = "icon-invert")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Progress lines own stdout, diagnostics go to stderr
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("icon_invert={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let config = Config::default();

    let mut converter = Converter::new(config).context("Failed to configure converter")?;

    let report = converter.run().context("Failed to convert icons")?;

    tracing::info!("Converted {} icon(s)", report.converted.len());

    Ok(())
}
