use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::num::{NonZeroU32, NonZeroU64};
use std::time::Duration;

/// Name of the optional config file read from the working directory.
pub const CONFIG_FILE: &str = "dog_widget.toml";

/// Prefix for environment overrides, e.g. `DOG_WIDGET_PORT=8080`.
pub const ENV_PREFIX: &str = "DOG_WIDGET_";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub dog_facts_api_base_url: String,
    pub dog_breeds_api_base_url: String,
    pub fact_refresh_interval_ms: NonZeroU64,
    /// How many facts to ask the facts API for. Only the first one is shown.
    pub facts_requested: NonZeroU32,
    pub log_filter: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 12345,
            dog_facts_api_base_url: "https://dog-api.kinduff.com".into(),
            dog_breeds_api_base_url: "https://dog.ceo".into(),
            fact_refresh_interval_ms: NonZeroU64::new(10_000).unwrap_or(NonZeroU64::MIN),
            facts_requested: NonZeroU32::new(2).unwrap_or(NonZeroU32::MIN),
            log_filter: "info".into(),
        }
    }
}

impl Configuration {
    /// Loads configuration from defaults, then `dog_widget.toml`, then
    /// `DOG_WIDGET_*` environment variables (highest priority).
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::figment()
            .extract()
            .map_err(|error| anyhow::anyhow!("Invalid configuration: {}", error))
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Configuration::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn fact_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.fact_refresh_interval_ms.get())
    }
}
