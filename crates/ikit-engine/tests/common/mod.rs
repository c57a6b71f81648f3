//! Common test utilities for ikit-engine workflow tests.

use std::collections::HashMap;

use ikit_engine::{Engine, Note};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create an Engine connected to the mock server.
pub fn engine_for_mock(server: &MockServer) -> Engine {
    let client = ikit_engine::ClientBuilder::new().url(server.uri()).build();
    Engine::from_client(client)
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
pub fn example_json(id: &str, sentence: &str, furigana: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "sentence": sentence,
        "sentence_with_furigana": furigana,
        "translation": "a translation",
        "deck_name": "Some Show"
    })
}

/// A context response with one sentence on each side.
#[allow(dead_code)]
pub fn context_body(prev: &str, next: &str) -> serde_json::Value {
    serde_json::json!({
        "pretext_sentences": [
            { "sentence": prev, "sentence_with_furigana": prev }
        ],
        "posttext_sentences": [
            { "sentence": next, "sentence_with_furigana": next }
        ]
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

/// Mount a mock that can be called any number of times.
#[allow(dead_code)]
pub async fn mock_endpoint_any(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .expect(0..)
        .mount(server)
        .await;
}

/// Build a note snapshot from field name/value pairs.
#[allow(dead_code)]
pub fn note_with_fields(id: i64, pairs: &[(&str, &str)]) -> Note {
    let fields = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();
    Note::new(id, fields)
}
