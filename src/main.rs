use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use serterm::config::{Config, ConfigStore};
use serterm::startup::{AsyncReadinessGate, GateTiming};

/// Headless startup for the serterm core: runs the readiness gate,
/// then reports which configuration won.
#[derive(Parser)]
#[command(name = "serterm", version, about)]
struct Cli {
    /// Path to the configuration file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Collapse the splash fade to a single tick.
    #[arg(long)]
    skip_splash: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    serterm::init_tracing();
    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let store = ConfigStore::new(Config::default(), path.clone());

    let timing = if cli.skip_splash {
        GateTiming {
            opacity_step: 1.0,
            ..GateTiming::default()
        }
    } else {
        GateTiming::default()
    };

    let gate = AsyncReadinessGate::with_timing(store.clone(), timing);
    let loaded = gate.run().await;

    if loaded {
        tracing::info!(path = %path.display(), "using persisted configuration");
    } else {
        tracing::info!(path = %path.display(), "using default configuration");
    }

    let config = store.get();
    println!(
        "terminal: {} over {}{}",
        config.terminal.terminal_type,
        config.terminal.io.io_type,
        if config.terminal_is_open {
            " (open)"
        } else {
            ""
        }
    );

    Ok(())
}
