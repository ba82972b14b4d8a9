use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct MockDogFactsApi(MockServer);

impl MockDogFactsApi {
    pub async fn new() -> Self {
        Self(MockServer::builder().start().await)
    }

    pub fn base_url(&self) -> String {
        self.0.uri()
    }

    /// Serves two facts per request and returns the first, which is the one
    /// the widget should display.
    pub async fn configure_dog_fact(&self) -> String {
        let fact = format!("This dog is called '{}'.", Uuid::new_v4());
        let discarded = format!("This dog is not shown '{}'.", Uuid::new_v4());
        self.respond_with_facts(json!({ "facts": [fact, discarded] }))
            .await;
        fact
    }

    pub async fn configure_empty_facts(&self) {
        self.respond_with_facts(json!({ "facts": [] })).await;
    }

    pub async fn configure_malformed_body(&self) {
        Mock::given(method("GET"))
            .and(path("/api/facts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&self.0)
            .await;
    }

    pub async fn setup_failure(&self) {
        Mock::given(method("GET"))
            .and(path("/api/facts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&self.0)
            .await;
    }

    /// Number of fact requests received so far.
    pub async fn request_count(&self) -> usize {
        self.0
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }

    async fn respond_with_facts(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/facts"))
            .and(query_param("number", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.0)
            .await;
    }
}
