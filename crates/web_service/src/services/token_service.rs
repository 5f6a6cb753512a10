//! Pass-through client for the external token-issuing service
//!
//! Login exchanges credentials for an `{access, refresh}` pair; logout
//! blacklists a refresh token. Bodies are forwarded without interpretation.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::dto::LoginCredentials;

const TOKEN_PATH: &str = "/api/token/";
const BLACKLIST_PATH: &str = "/api/token/blacklist/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TokenServiceError {
    #[error("Token service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token service rejected the request with status {0}")]
    Rejected(u16),
}

#[derive(Debug, Clone)]
pub struct TokenServiceClient {
    client: Client,
    base_url: String,
}

impl TokenServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TokenServiceError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a token pair
    pub async fn obtain_token_pair(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Value, TokenServiceError> {
        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        let response = self.client.post(&url).json(credentials).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token service refused credentials");
            return Err(TokenServiceError::Rejected(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Invalidate a refresh token
    pub async fn blacklist(&self, refresh: &str) -> Result<(), TokenServiceError> {
        let url = format!("{}{}", self.base_url, BLACKLIST_PATH);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "refresh": refresh }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token blacklist request failed");
            return Err(TokenServiceError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
