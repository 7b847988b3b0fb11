mod config;
mod errors;
mod models;
mod pipeline;
mod schedule;
mod scoring;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogConfig, LogFormat, RunMode};
use crate::schedule::clock::SystemClock;
use crate::schedule::Scheduler;
use crate::scoring::ats::KeywordOverlapScorer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()?;

    init_tracing(&config.log);

    info!("Starting autoapply v{}", env!("CARGO_PKG_VERSION"));
    match config.mode {
        RunMode::Once => info!("Single pass, threshold {}", config.threshold),
        RunMode::Continuous { interval } => info!(
            "Scanning every {} minutes, threshold {}",
            interval.as_secs() / 60,
            config.threshold
        ),
    }

    let scheduler = Scheduler::new(config, Arc::new(KeywordOverlapScorer), Arc::new(SystemClock));
    if let Err(e) = scheduler.run().await {
        error!("{e}");
        return Err(e.into());
    }

    Ok(())
}

/// Installs the global subscriber. An unparsable directive falls back to `info`.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match log.format {
        LogFormat::Full => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init(),
    }
}
