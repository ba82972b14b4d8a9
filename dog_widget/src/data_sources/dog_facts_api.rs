use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use std::num::NonZeroU32;
use tracing::instrument;

/// Anything that can hand out a batch of dog facts.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_facts(&self, count: NonZeroU32) -> Result<Vec<String>, anyhow::Error>;
}

pub struct DogFactsApi {
    client: ClientWithMiddleware,
    base_url: String,
}

impl DogFactsApi {
    pub fn new(base_url: String, client: ClientWithMiddleware) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl FactSource for DogFactsApi {
    #[instrument(skip(self))]
    async fn fetch_facts(&self, count: NonZeroU32) -> Result<Vec<String>, anyhow::Error> {
        // For an example, see: https://dog-api.kinduff.com/api/facts?number=2
        #[derive(Deserialize)]
        struct ResponseModel {
            pub facts: Vec<String>,
        }

        let response = self
            .client
            .get(format!("{}/api/facts", self.base_url))
            .query(&[("number", count.get())])
            .send()
            .await
            .context("Failed to make request")?
            .error_for_status()
            .context("Dog facts API returned an error status")?
            .json::<ResponseModel>()
            .await
            .context("Invalid response returned")?;

        Ok(response.facts)
    }
}
