//! MVP Shell server
//!
//! Entry point for the dashboard shell.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;

use mvp_shell::{config::AppConfig, server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing (M-LOG-STRUCTURED)
    telemetry::init(config.log.format);

    server::start_server(Arc::new(config)).await
}
