use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};

/// A hosted chat-completion endpoint.
///
/// The access token is passed per call so one client can be built at startup
/// even when credentials are still missing.
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
        access_token: &str,
    ) -> Result<ChatCompletionResponse>;
}
