use std::path::Path;

use clap::Parser;
use tracing::info;

use drawbridge_server::api::{self, AppState};
use drawbridge_server::config::DrawbridgeConfig;
use drawbridge_server::{store_factory, telemetry};

/// Drawbridge upload HTTP server.
#[derive(Parser, Debug)]
#[command(name = "drawbridge-server", about = "HTTP upload service for Drawbridge")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "drawbridge.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration from the TOML file, or use defaults if the file
    // does not exist.
    let mut config: DrawbridgeConfig = if Path::new(&cli.config).exists() {
        let contents = std::fs::read_to_string(&cli.config)?;
        toml::from_str(&contents)?
    } else {
        toml::from_str("")?
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.store.apply_env_overrides();

    telemetry::init();

    let store = store_factory::build_store(&config.store).await?;
    let state = AppState {
        store,
        store_config: config.store,
        max_upload_bytes: config.server.max_upload_bytes,
    };
    let app = api::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "drawbridge server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
