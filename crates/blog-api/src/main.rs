//! Blog API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p blog-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` when present).

use blog_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Pick the log format from the environment; fall back to defaults so config errors get logged
    let tracing_config = config
        .as_ref()
        .map_or_else(|_| TracingConfig::default(), |c| TracingConfig::for_environment(c.app.env));
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Blog API Server..."
    );

    if let Err(e) = blog_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
