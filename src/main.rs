//! Pricing API server.
//!
//! Environment:
//! - `POOL_CONFIG_DIR`: directory holding `facility.yaml` and `rates.yaml`;
//!   the built-in house rates are used when unset
//! - `BIND_ADDR`: listen address, default `0.0.0.0:8080`
//! - `RUST_LOG`: tracing filter, default `info`

use cue_rates::api::{AppState, create_router};
use cue_rates::config::ConfigLoader;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = match std::env::var("POOL_CONFIG_DIR") {
        Ok(dir) => {
            info!(path = %dir, "Loading pricing configuration");
            ConfigLoader::load(&dir)?
        }
        Err(_) => {
            info!("POOL_CONFIG_DIR not set, using built-in rates");
            ConfigLoader::builtin()
        }
    };
    info!(
        facility = %config.facility().name,
        opening_hours = %config.window().describe(),
        "Pricing configuration ready"
    );

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = create_router(AppState::new(config));

    info!("Starting API server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
