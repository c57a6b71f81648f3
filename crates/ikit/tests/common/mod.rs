//! Common test utilities for ImmersionKit API tests.

use ikit::ImmersionKitClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client connected to the mock server.
pub fn client_for_mock(server: &MockServer) -> ImmersionKitClient {
    ImmersionKitClient::builder().url(server.uri()).build()
}

/// A dictionary response body with a single result group.
#[allow(dead_code)] // Not all test files use this
pub fn dictionary_body(examples: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "data": [{ "examples": examples }]
    })
}

/// A single example entry as the dictionary endpoint shapes it.
#[allow(dead_code)]
pub fn example_json(id: &str, sentence: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "sentence": sentence,
        "sentence_with_furigana": sentence,
        "translation": "a translation",
        "deck_name": "Some Show"
    })
}

/// Mount a mock for an endpoint path (expect exactly 1 call).
#[allow(dead_code)]
pub async fn mock_endpoint(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
