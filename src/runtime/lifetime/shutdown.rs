use tokio::signal;
use tracing::{info, warn};

/// Resolve once Ctrl+C is received
///
/// Nothing needs flushing on the way out; the dataset is read-only.
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}
