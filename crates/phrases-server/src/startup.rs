//! Server startup utilities.

use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api", addr);
    info!("Health:    http://{}/health", addr);
    info!("{}", separator);
}
