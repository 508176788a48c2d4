use anyhow::Context;
use clap::Parser;
use configuration::Overrides;
use database::{SchemaMode, Store};
use std::net::SocketAddr;
use std::path::PathBuf;

/// The main entry point for the QuickCart catalog service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Load the .env file before tracing starts so RUST_LOG may come from it
    let env_file = configuration::load_env_file(&cli.env_file);

    let _log_guard = configuration::init_tracing("info")?;
    match env_file {
        Ok(true) => tracing::info!(path = %cli.env_file.display(), "Loaded environment from file."),
        Ok(false) => {}
        Err(e) => tracing::warn!(path = %cli.env_file.display(), error = %e, "Ignoring unreadable env file."),
    }

    let settings = configuration::load_settings()
        .context("Failed to load configuration")?
        .with_overrides(&cli.overrides);
    tracing::debug!(?settings, "Configuration loaded.");

    // Establish the store; an unreachable database is not fatal
    let schema_mode = if cli.skip_seed {
        SchemaMode::Skip
    } else {
        SchemaMode::EnsureAndSeed
    };
    let store = Store::establish(&settings.database, schema_mode).await;
    if !store.is_configured() {
        tracing::warn!("Running in degraded mode: product data is unavailable.");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    web_server::run_server(addr, store)
        .await
        .with_context(|| format!("Server on {addr} failed"))
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A minimal product catalog with monitoring probes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Optional file of KEY=VALUE pairs loaded into the environment at startup.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Connect to the database without creating or seeding the products table.
    #[arg(long)]
    skip_seed: bool,

    #[command(flatten)]
    overrides: Overrides,
}
