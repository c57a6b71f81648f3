//! Tests for sentence context operations.

mod common;

use common::{client_for_mock, mock_endpoint, setup_mock_server};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_with_context_picks_adjacent_sentences() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "sentence_with_context",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pretext_sentences": [
                { "sentence": "二つ前の文。", "sentence_with_furigana": "二[ふた]つ前[まえ]の文[ぶん]。" },
                { "sentence": "前の文。", "sentence_with_furigana": "前[まえ]の文[ぶん]。" }
            ],
            "posttext_sentences": [
                { "sentence": "次の文。", "sentence_with_furigana": "次[つぎ]の文[ぶん]。" },
                { "sentence": "二つ次の文。", "sentence_with_furigana": "二[ふた]つ次[つぎ]の文[ぶん]。" }
            ]
        })),
    )
    .await;

    let client = client_for_mock(&server);
    let context = client.sentences().with_context("ex_1").await.unwrap();

    // Immediately adjacent means last of pretext, first of posttext.
    assert_eq!(context.previous().unwrap().sentence, "前の文。");
    assert_eq!(context.next().unwrap().sentence, "次の文。");
}

#[tokio::test]
async fn test_with_context_sends_id() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/sentence_with_context"))
        .and(query_param("id", "ex_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pretext_sentences": [],
            "posttext_sentences": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for_mock(&server);
    let context = client.sentences().with_context("ex_42").await.unwrap();

    assert!(context.previous().is_none());
    assert!(context.next().is_none());
}
