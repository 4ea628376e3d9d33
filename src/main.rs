//! # twd-api
//!
//! Serves The Walking Dead dataset over HTTP.
//!
//! ```bash
//! RUST_LOG=info twd-api --data data.json --port 3000
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use twd_api::config::Config;
use twd_api::http::{self, AppState};
use twd_api::lifecycle::{setup_tracing, CatalogSystem};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::parse();
    let addr = config.bind_addr().map_err(|e| e.to_string())?;

    info!(data = %config.data_path.display(), "Starting TWD API");

    let system = CatalogSystem::open(&config).map_err(|e| {
        error!(error = %e, "Failed to open dataset");
        e.to_string()
    })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    let state = Arc::new(AppState::new(&system));
    let server = tokio::spawn(http::serve(listener, state));

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
    }

    // Stop accepting; open connections drop their client clones as they finish.
    server.abort();
    let _ = server.await;

    match tokio::time::timeout(SHUTDOWN_TIMEOUT, system.shutdown()).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Shutdown timed out with requests still in flight");
            Ok(())
        }
    }
}
