//! Integration tests for HuggingFaceClient against a mock inference endpoint

use std::time::Duration;

use llm_client::{
    ChatCompletionClient, ChatCompletionRequest, ChatMessage, HuggingFaceClient, LLMError,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: "test-model".to_string(),
        messages: vec![ChatMessage::user("Task: Learn Spanish")],
        max_tokens: Some(512),
        temperature: Some(0.1),
        n: Some(1),
        stream: Some(false),
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_chat_completion_sends_auth_and_sampling_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer hf_secret"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "max_tokens": 512,
            "n": 1,
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[\"a\", \"b\"]")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::new(
        format!("{}/v1", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    let response = client
        .chat_completion(sample_request(), "hf_secret")
        .await
        .unwrap();

    assert_eq!(response.first_text().as_deref(), Some("[\"a\", \"b\"]"));
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();
    let err = client
        .chat_completion(sample_request(), "hf_secret")
        .await
        .unwrap_err();

    match err {
        LLMError::Api { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limited");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();
    let err = client
        .chat_completion(sample_request(), "hf_secret")
        .await
        .unwrap_err();

    assert!(matches!(err, LLMError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn test_empty_choices_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap();
    let err = client
        .chat_completion(sample_request(), "hf_secret")
        .await
        .unwrap_err();

    assert!(matches!(err, LLMError::EmptyResponse), "got {err:?}");
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("[]"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::new(mock_server.uri(), Duration::from_millis(200)).unwrap();
    let err = client
        .chat_completion(sample_request(), "hf_secret")
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "Expected timeout, got {err:?}");
}
