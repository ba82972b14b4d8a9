use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

/// Anything that can list breed keys.
#[async_trait]
pub trait BreedSource: Send + Sync {
    /// Breed keys in the order the upstream returned them.
    async fn fetch_breed_names(&self) -> Result<Vec<String>, anyhow::Error>;
}

pub struct DogBreedsApi {
    client: ClientWithMiddleware,
    base_url: String,
}

impl DogBreedsApi {
    pub fn new(base_url: String, client: ClientWithMiddleware) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl BreedSource for DogBreedsApi {
    #[instrument(skip(self))]
    async fn fetch_breed_names(&self) -> Result<Vec<String>, anyhow::Error> {
        // For an example, see: https://dog.ceo/api/breeds/list/all
        // Sub-breed values are ignored; only the keys matter.
        #[derive(Deserialize)]
        struct ResponseModel {
            pub message: Map<String, Value>,
        }

        let response = self
            .client
            .get(format!("{}/api/breeds/list/all", self.base_url))
            .send()
            .await
            .context("Failed to make request")?
            .error_for_status()
            .context("Dog breeds API returned an error status")?
            .json::<ResponseModel>()
            .await
            .context("Invalid response returned")?;

        Ok(response.message.into_iter().map(|(breed, _)| breed).collect())
    }
}
