//! Shared fixtures for the HTTP API tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use focus_core::Config;
use llm_client::{ChatCompletionClient, ChatCompletionRequest, ChatCompletionResponse, LLMError};
use web_service::services::{SubtaskGenerator, TokenServiceClient};
use web_service::AppState;

/// Fake inference client replaying canned replies and counting calls
pub struct MockChatClient {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<ChatCompletionRequest>>,
    fail_with_status: Option<u16>,
}

impl MockChatClient {
    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
            fail_with_status: None,
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail_with_status: Some(status),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatCompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatCompletionClient for MockChatClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
        _access_token: &str,
    ) -> llm_client::Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(status) = self.fail_with_status {
            return Err(LLMError::Api {
                status,
                body: "mock failure".to_string(),
            });
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default();
        Ok(ChatCompletionResponse::from_text(reply))
    }
}

pub fn configured(language: &str) -> Config {
    let mut config = Config::default();
    config.hf_model = Some("test-model".to_string());
    config.hf_token = Some("hf_test".to_string());
    config.prompt_language = language.parse().unwrap();
    config
}

pub fn app_state(config: &Config, client: Arc<dyn ChatCompletionClient>) -> AppState {
    AppState {
        subtask_generator: SubtaskGenerator::new(config, client),
        token_service: TokenServiceClient::new(config.token_service_url.clone()).unwrap(),
    }
}
