use anyhow::anyhow;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::FactDisplay;
use crate::data_sources::dog_facts_api::FactSource;

/// Shown in place of a fact whenever a refresh fails, whatever the cause.
pub const FAILED_FACT_MESSAGE: &str = "Failed to fetch a dog fact. Please try again later.";

/// Shortest refresh period; `tokio::time::interval` rejects a zero period.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

pub struct FactRefresher {
    source: Arc<dyn FactSource>,
    display: Arc<dyn FactDisplay>,
    facts_requested: NonZeroU32,
    interval: Duration,
}

impl FactRefresher {
    pub fn new(
        source: Arc<dyn FactSource>,
        display: Arc<dyn FactDisplay>,
        facts_requested: NonZeroU32,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            display,
            facts_requested,
            interval: interval.max(MIN_REFRESH_INTERVAL),
        }
    }

    /// Fetches one batch of facts and shows the first, or the failure message.
    #[instrument(skip(self), fields(facts_requested = self.facts_requested.get()))]
    pub async fn refresh_once(&self) {
        match self.first_fact().await {
            Ok(fact) => self.display.show_text(&fact),
            Err(error) => {
                warn!(error = ?error, "Failed to refresh dog fact");
                self.display.show_text(FAILED_FACT_MESSAGE);
            }
        }
    }

    async fn first_fact(&self) -> Result<String, anyhow::Error> {
        self.source
            .fetch_facts(self.facts_requested)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Empty array of facts returned"))
    }

    /// Refreshes now and then once per interval until the handle is stopped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> FactRefresherHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let join_handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = self.refresh_once() => {}
                }
            }

            info!("Fact refresher stopped");
        });

        FactRefresherHandle { token, join_handle }
    }
}

/// Owns a running [`FactRefresher`] loop.
pub struct FactRefresherHandle {
    token: CancellationToken,
    join_handle: JoinHandle<()>,
}

impl FactRefresherHandle {
    #[cfg(test)]
    fn is_running(&self) -> bool {
        !self.join_handle.is_finished()
    }

    /// Stops the loop, abandoning any refresh in flight, and waits for it to exit.
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(error) = self.join_handle.await {
            warn!(error = ?error, "Fact refresher task did not exit cleanly");
        }
    }
}
