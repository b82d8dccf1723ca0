//! Imperium Codex wiki server.
//!
//! Serves the reference catalogue as browsable, cross-linked HTML pages.

use codex_server::{router, DataProvider, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("codex_server=info,tower_http=info")
        .init();

    // Optional config file as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => match ServerConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config {path}: {e}");
                std::process::exit(1);
            }
        },
        None => ServerConfig::default(),
    };

    let provider = match &config.data_path {
        Some(path) => DataProvider::File(path.clone()),
        None => DataProvider::Embedded,
    };

    // Fail fast on an unreadable catalogue instead of 500-ing every request.
    if let Err(e) = provider.load() {
        tracing::error!("Catalogue failed to load: {e}");
        std::process::exit(1);
    }

    info!("Imperium Codex v{}", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}", config.bind_address);

    let listener = match tokio::net::TcpListener::bind(config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {e}", config.bind_address);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, router(provider)).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
