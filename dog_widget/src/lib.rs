mod configuration;
pub mod data_sources;
mod server;
pub mod widget;

pub use configuration::Configuration;
pub use server::{run_server, WidgetServer};

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `RUST_LOG`, when set, takes
/// precedence over `default_filter`.
pub fn initialise_tracing(default_filter: &str) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))
}
