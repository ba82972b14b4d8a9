use crate::data_sources::dog_breeds_api::DogBreedsApi;
use crate::data_sources::dog_facts_api::DogFactsApi;
use crate::widget::breed_loader::BreedLoader;
use crate::widget::fact_refresher::{FactRefresher, FactRefresherHandle};
use crate::widget::page::{BreedMenu, FactPanel};
use crate::Configuration;
use actix_web::dev::Server;
use actix_web::web::{get, Data};
use actix_web::{App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use anyhow::{anyhow, Context};
use reqwest_middleware::ClientBuilder;
use reqwest_tracing::TracingMiddleware;
use std::net::TcpListener;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use super::{breeds_route, fact_route};

/// The HTTP server plus the background fact refresher feeding it.
pub struct WidgetServer {
    server: Server,
    fact_refresher: FactRefresherHandle,
}

impl WidgetServer {
    /// Serves until the server shuts down, then stops the fact refresher.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let served = self.server.await;
        self.fact_refresher.stop().await;
        served.context("Server terminated unexpectedly")
    }
}

/// Wires the dog APIs into the page elements, starts the fact refresher and
/// the one-off breed load, and builds the server on `listener`.
///
/// Must be called from within a tokio-based runtime.
pub async fn run_server(
    config: Configuration,
    listener: TcpListener,
) -> Result<WidgetServer, anyhow::Error> {
    let client = ClientBuilder::new(
        reqwest::ClientBuilder::new()
            .build()
            .context("Failed to build http client")?,
    )
    .with(TracingMiddleware::default())
    .build();

    let dog_facts_api = Arc::new(DogFactsApi::new(
        config.dog_facts_api_base_url.clone(),
        client.clone(),
    ));
    let dog_breeds_api = Arc::new(DogBreedsApi::new(
        config.dog_breeds_api_base_url.clone(),
        client,
    ));

    let fact_panel = Arc::new(FactPanel::default());
    let breed_menu = Arc::new(BreedMenu::default());

    let fact_refresher = FactRefresher::new(
        dog_facts_api,
        fact_panel.clone(),
        config.facts_requested,
        config.fact_refresh_interval(),
    )
    .spawn();

    let breed_loader = BreedLoader::new(dog_breeds_api, breed_menu.clone());
    tokio::spawn(async move { breed_loader.load().await });

    let prometheus = PrometheusMetricsBuilder::new("")
        .endpoint("/metrics")
        .build()
        .map_err(|error| anyhow!("Failed to build metrics middleware: {}", error))?;

    let fact_panel = Data::from(fact_panel);
    let breed_menu = Data::from(breed_menu);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(prometheus.clone())
            .wrap(TracingLogger::default())
            .app_data(fact_panel.clone())
            .app_data(breed_menu.clone())
            .route("/fact", get().to(fact_route::handler))
            .route("/breeds", get().to(breeds_route::handler))
    })
    .listen(listener)?
    .run();

    info!(
        interval_ms = config.fact_refresh_interval_ms.get(),
        "Dog widget server started"
    );

    Ok(WidgetServer {
        server,
        fact_refresher,
    })
}
