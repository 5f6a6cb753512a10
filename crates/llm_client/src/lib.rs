pub mod client;
pub mod client_trait;
pub mod error;
pub mod models;

pub use client::HuggingFaceClient;
pub use client_trait::ChatCompletionClient;
pub use error::{LLMError, Result};
pub use models::*;
