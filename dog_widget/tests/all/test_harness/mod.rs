pub mod mocks;

use self::mocks::{MockDogBreedsApi, MockDogFactsApi};
use dog_widget::{run_server, Configuration};
use std::net::TcpListener;
use std::num::NonZeroU64;

/// Mock upstream APIs. They are started, and usually configured, before the
/// widget server, since the breed list is only fetched once at start-up.
pub struct MockApis {
    pub dog_facts_api: MockDogFactsApi,
    pub dog_breeds_api: MockDogBreedsApi,
}

impl MockApis {
    pub async fn start() -> Self {
        Self {
            dog_facts_api: MockDogFactsApi::new().await,
            dog_breeds_api: MockDogBreedsApi::new().await,
        }
    }
}

pub struct TestHarness {
    pub client: reqwest::Client,

    /// The configuration that this instance of the service started with.
    pub config: Configuration,

    pub mocks: MockApis,
}

impl TestHarness {
    /// Starts a new instance of the service against the given mocks, with a
    /// short fact refresh interval.
    pub async fn start(mocks: MockApis) -> TestHarness {
        let host = "127.0.0.1";
        let listener = TcpListener::bind(format!("{}:0", host)).unwrap();
        let port = listener.local_addr().unwrap().port();
        let config = Configuration {
            host: host.into(),
            port,
            dog_facts_api_base_url: mocks.dog_facts_api.base_url(),
            dog_breeds_api_base_url: mocks.dog_breeds_api.base_url(),
            fact_refresh_interval_ms: NonZeroU64::new(100).unwrap(),
            ..Configuration::default()
        };

        let server = run_server(config.clone(), listener)
            .await
            .expect("Failed to build server");

        let _server_join_handle = actix_rt::spawn(server.run());

        let client = reqwest::ClientBuilder::new()
            .build()
            .expect("Failed to build http client");

        TestHarness {
            client,
            config,
            mocks,
        }
    }

    /// Builds a URL to a relative path hosted by our service
    pub fn build_url(&self, relative_path: impl Into<String>) -> String {
        format!(
            "http://{}:{}{}",
            self.config.host,
            self.config.port,
            relative_path.into()
        )
    }
}
