use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Empty response: no choices returned")]
    EmptyResponse,
}

impl LLMError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LLMError::Http(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, LLMError>;
