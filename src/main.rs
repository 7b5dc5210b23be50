//! Launchboard Server
//!
//! Run with: cargo run -- [--debug] [--config launchboard.toml]
//!
//! # Configuration
//!
//! Settings come from the TOML file given with `--config`, else from the
//! first file found in the default locations (see [`Config::default_path`]),
//! with environment overrides on top. A config file that exists but does not
//! load stops startup. `--print-config` writes a commented template.
//!
//! Environment overrides:
//! - `LAUNCHBOARD_DATA`: Launch records CSV (default: data/spacex_launch_dash.csv)
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 127.0.0.1)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL`, `LAUNCHBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Context;
use clap::Parser;
use launchboard::api::{serve, AppState};
use launchboard::config::{generate_default_config, Config, LoggingConfig};
use launchboard::dataset::LaunchLoader;
use launchboard::reactive::CallbackRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "launchboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive SpaceX launch records dashboard")]
struct Cli {
    /// Debug mode: verbose logs and callback errors, no page caching
    #[arg(long)]
    debug: bool,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config_path = cli.config.clone().or_else(Config::default_path);
    let mut config = match Config::load_from(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Logging settings live in the file, so report with defaults
            init_tracing(&LoggingConfig::default(), cli.debug);
            tracing::error!(error = %e, "Failed to load config");
            return Err(e).context("loading config");
        }
    };
    if cli.debug {
        config.server.debug = true;
    }

    init_tracing(&config.logging, config.server.debug);

    tracing::info!("Starting launchboard v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
        None => tracing::info!("Using default config with environment overrides"),
    }
    if config.server.debug {
        tracing::info!("Debug mode enabled");
    }

    // The table is loaded exactly once and never mutated afterwards
    let loader = LaunchLoader::new().with_columns(config.dataset.columns.clone());
    let table = match loader.load(&config.dataset.path) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!(path = %config.dataset.path.display(), error = %e, "Failed to load dataset");
            return Err(e.into());
        }
    };

    let registry = CallbackRegistry::dashboard()?;
    let api_config = config.api_config();
    let state = AppState::new(table, registry, &config.layout_settings(), api_config.clone())?;

    serve(state, &api_config).await?;

    tracing::info!("launchboard stopped");
    Ok(())
}

/// Install the global tracing subscriber
fn init_tracing(logging: &LoggingConfig, debug: bool) {
    let default_filter = if debug {
        "launchboard=debug,tower_http=debug".to_string()
    } else {
        format!("launchboard={},tower_http=info", logging.level)
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
