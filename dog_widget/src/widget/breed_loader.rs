use std::sync::Arc;
use tracing::{error, info, instrument};

use super::{BreedOption, BreedSelect};
use crate::data_sources::dog_breeds_api::BreedSource;

/// Fills the breed selection control once, at start-up.
pub struct BreedLoader {
    source: Arc<dyn BreedSource>,
    select: Arc<dyn BreedSelect>,
}

impl BreedLoader {
    pub fn new(source: Arc<dyn BreedSource>, select: Arc<dyn BreedSelect>) -> Self {
        Self { source, select }
    }

    /// Appends one option per breed key. Failures are logged, never returned.
    #[instrument(skip(self))]
    pub async fn load(&self) {
        let breeds = match self.source.fetch_breed_names().await {
            Ok(breeds) => breeds,
            Err(error) => {
                error!(error = ?error, "Error fetching dog breeds");
                return;
            }
        };

        let count = breeds.len();
        for breed in breeds {
            self.select.append_option(BreedOption::from_breed_key(breed));
        }
        info!(count, "Loaded dog breeds");
    }
}
