use std::time::{Duration, Instant};

use async_trait::async_trait;
use focus_core::Config;
use log::{debug, error, info};
use reqwest::Client;

use crate::client_trait::ChatCompletionClient;
use crate::error::{LLMError, Result};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Client for the Hugging Face inference router (or any OpenAI-compatible
/// `/chat/completions` endpoint).
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
}

impl HuggingFaceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("focus-flow/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.hf_base_url.clone(), config.inference_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ChatCompletionClient for HuggingFaceClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
        access_token: &str,
    ) -> Result<ChatCompletionResponse> {
        let url = self.completions_url();
        info!(
            "Sending chat completion to {} (model={}, messages={})",
            url,
            request.model,
            request.messages.len()
        );
        let start_time = Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send chat completion request: {}", e);
                LLMError::Http(e)
            })?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(
            "Chat completion answered with status {} after {:?}",
            status,
            start_time.elapsed()
        );

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!("Chat completion failed with status {}: {}", status, body);
            return Err(LLMError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_slice(&body)?;
        if completion.choices.is_empty() {
            return Err(LLMError::EmptyResponse);
        }
        Ok(completion)
    }
}
