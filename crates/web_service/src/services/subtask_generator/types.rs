//! Subtask generation errors and tuning constants

use llm_client::LLMError;
use thiserror::Error;

use super::parser::ParseError;

/// Invoke-and-parse attempts per request
pub const MAX_RETRIES: u32 = 3;
pub const MAX_NEW_TOKENS: u32 = 512;
pub const TEMPERATURE: f32 = 0.1;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Hugging Face credentials are not configured")]
    ConfigurationMissing,

    #[error("Model invocation failed: {0}")]
    Invocation(#[from] LLMError),

    /// No bracketed list, or a list that is not an array of strings
    #[error(transparent)]
    Response(#[from] ParseError),
}

impl GenerationError {
    /// Everything except missing configuration is worth another attempt
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GenerationError::ConfigurationMissing)
    }
}
