//! Core subtask generation: invoke the model, parse, retry

use std::sync::Arc;

use focus_core::{Config, GeneratedItem, InferenceCredentials, PromptLanguage, Task};
use llm_client::{ChatCompletionClient, ChatCompletionRequest, HuggingFaceClient, LLMError};

use super::parser;
use super::prompt;
use super::types::{GenerationError, MAX_NEW_TOKENS, MAX_RETRIES, TEMPERATURE};
use crate::services::retry::{retry, RetryPolicy};

pub struct SubtaskGenerator {
    client: Arc<dyn ChatCompletionClient>,
    credentials: Option<InferenceCredentials>,
    language: PromptLanguage,
    policy: RetryPolicy,
}

impl SubtaskGenerator {
    /// Generator backed by the given client. Credentials and prompt language
    /// are taken from `config` once, here.
    pub fn new(config: &Config, client: Arc<dyn ChatCompletionClient>) -> Self {
        Self {
            client,
            credentials: config.credentials(),
            language: config.prompt_language,
            policy: RetryPolicy::immediate(MAX_RETRIES),
        }
    }

    /// Generator talking to the configured Hugging Face endpoint
    pub fn from_config(config: &Config) -> Result<Self, LLMError> {
        let client = HuggingFaceClient::from_config(config)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn language(&self) -> PromptLanguage {
        self.language
    }

    /// Generate subtasks for `task`.
    ///
    /// Fails fast without calling the model when credentials are missing.
    /// Otherwise each attempt builds a fresh request; only the last failure
    /// is returned.
    pub async fn generate(&self, task: &Task) -> Result<Vec<GeneratedItem>, GenerationError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(GenerationError::ConfigurationMissing)?;

        let messages = prompt::build_messages(self.language, task);

        tracing::info!(
            task_title = %task.title,
            model = %credentials.model,
            "Generating subtasks"
        );

        let items = retry(self.policy, GenerationError::is_retryable, |attempt| {
            let request = ChatCompletionRequest {
                model: credentials.model.clone(),
                messages: messages.clone(),
                max_tokens: Some(MAX_NEW_TOKENS),
                temperature: Some(TEMPERATURE),
                n: Some(1),
                stream: Some(false),
            };
            let client = Arc::clone(&self.client);
            let access_token = credentials.access_token.clone();

            async move {
                tracing::debug!(attempt, "Requesting subtasks from model");
                let completion = client.chat_completion(request, &access_token).await?;
                let content = completion.first_text().unwrap_or_default();
                parser::parse_items(&content).map_err(GenerationError::from)
            }
        })
        .await?;

        tracing::info!(
            task_title = %task.title,
            count = items.len(),
            "Generated subtasks"
        );
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use llm_client::{ChatCompletionResponse, Role};
    use std::collections::{HashSet, VecDeque};
    use std::sync::Mutex;

    /// Replays canned replies and records every request it receives
    struct ScriptedClient {
        replies: Mutex<VecDeque<Result<String, u16>>>,
        requests: Mutex<Vec<(ChatCompletionRequest, String)>>,
    }

    impl ScriptedClient {
        fn new(replies: Vec<Result<&str, u16>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatCompletionClient for ScriptedClient {
        async fn chat_completion(
            &self,
            request: ChatCompletionRequest,
            access_token: &str,
        ) -> llm_client::Result<ChatCompletionResponse> {
            self.requests
                .lock()
                .unwrap()
                .push((request, access_token.to_string()));
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok("no list here".to_string()));
            match reply {
                Ok(text) => Ok(ChatCompletionResponse::from_text(text)),
                Err(status) => Err(LLMError::Api {
                    status,
                    body: "unavailable".to_string(),
                }),
            }
        }
    }

    fn configured() -> Config {
        let mut config = Config::default();
        config.hf_model = Some("test-model".to_string());
        config.hf_token = Some("hf_test".to_string());
        config
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let client = ScriptedClient::new(vec![Ok(
            r#"["Learn the alphabet", "Build vocabulary", "Practice speaking"]"#,
        )]);
        let generator = SubtaskGenerator::new(&configured(), client.clone());

        let items = generator.generate(&Task::new("Learn Spanish")).await.unwrap();

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Learn the alphabet", "Build vocabulary", "Practice speaking"]
        );
        assert!(items.iter().all(|i| !i.completed));
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_request_shape() {
        let client = ScriptedClient::new(vec![Ok(r#"["One"]"#)]);
        let generator = SubtaskGenerator::new(&configured(), client.clone());

        generator
            .generate(&Task::new("Learn Spanish").with_description("in six months"))
            .await
            .unwrap();

        let requests = client.requests.lock().unwrap();
        let (request, token) = &requests[0];
        assert_eq!(token, "hf_test");
        assert_eq!(request.model, "test-model");
        assert_eq!(request.max_tokens, Some(512));
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.n, Some(1));
        assert_eq!(request.messages.len(), 7);
        let last = request.messages.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "Tarea: Learn Spanish - in six months");
    }

    #[tokio::test]
    async fn test_no_list_exhausts_retries() {
        let client = ScriptedClient::new(vec![
            Ok("Sorry, I can't."),
            Ok("Still no."),
            Ok("Nope."),
            Ok(r#"["never reached"]"#),
        ]);
        let generator = SubtaskGenerator::new(&configured(), client.clone());

        let err = generator.generate(&Task::new("x")).await.unwrap_err();

        assert_eq!(client.calls(), MAX_RETRIES as usize);
        assert!(matches!(
            err,
            GenerationError::Response(parser::ParseError::NoList { .. })
        ));
        assert!(err.to_string().contains("Nope."));
    }

    #[tokio::test]
    async fn test_invalid_list_reports_raw_content() {
        let client = ScriptedClient::new(vec![
            Ok("[unquoted, text]"),
            Ok("[unquoted, text]"),
            Ok("[unquoted, text]"),
        ]);
        let generator = SubtaskGenerator::new(&configured(), client.clone());

        let err = generator.generate(&Task::new("x")).await.unwrap_err();

        assert_eq!(client.calls(), 3);
        assert!(err.to_string().contains("[unquoted, text]"));
    }

    #[tokio::test]
    async fn test_recovers_from_transient_failures() {
        let client = ScriptedClient::new(vec![Err(503), Ok("garbage"), Ok(r#"["Done"]"#)]);
        let generator = SubtaskGenerator::new(&configured(), client.clone());

        let items = generator.generate(&Task::new("x")).await.unwrap();

        assert_eq!(client.calls(), 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Done");
    }

    #[tokio::test]
    async fn test_last_error_is_surfaced() {
        let client = ScriptedClient::new(vec![Ok("garbage"), Ok("[bad]"), Err(503)]);
        let generator = SubtaskGenerator::new(&configured(), client.clone());

        let err = generator.generate(&Task::new("x")).await.unwrap_err();

        assert!(matches!(err, GenerationError::Invocation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_missing_credentials_make_no_calls() {
        for (model, token) in [(None, Some("t")), (Some("m"), None), (None, None)] {
            let mut config = Config::default();
            config.hf_model = model.map(str::to_string);
            config.hf_token = token.map(str::to_string);

            let client = ScriptedClient::new(vec![Ok(r#"["x"]"#)]);
            let generator = SubtaskGenerator::new(&config, client.clone());
            assert!(!generator.is_configured());

            let err = generator.generate(&Task::new("x")).await.unwrap_err();
            assert!(matches!(err, GenerationError::ConfigurationMissing));
            assert_eq!(client.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_custom_retry_policy() {
        let client = ScriptedClient::new(vec![]);
        let generator = SubtaskGenerator::new(&configured(), client.clone())
            .with_retry_policy(RetryPolicy::immediate(5));

        let _ = generator.generate(&Task::new("x")).await;

        assert_eq!(client.calls(), 5);
    }
}
