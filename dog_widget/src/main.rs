use std::net::TcpListener;

use anyhow::Context;
use dog_widget::{initialise_tracing, run_server, Configuration};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Configuration::load().context("Failed to load widget configuration")?;
    initialise_tracing(&config.log_filter).context("Failed to initialise tracing")?;
    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address).context(format!("Failed to bind to {}", address))?;
    run_server(config, listener)
        .await
        .context("Failed to build server")?
        .run()
        .await
}
