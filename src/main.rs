//! FitTrack - Fitness Tracker Statistics
//!
//! Main entry point: prints a summary line for every configured package.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = fittrack::storage::config::load_config().context("Failed to load configuration")?;

    // Logs go to stderr so stdout carries only the summaries
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = fittrack::driver::run(&config.packages, &mut out)?;

    tracing::info!("Processed {} workouts", written);

    Ok(())
}
