//! Request and response bodies of the HTTP API
use focus_core::{GeneratedItem, Task};
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GenerateItemsRequest {
    pub task: Task,
}

/// `{ status, message, data? }` envelope used by the generation endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
            data: None,
        }
    }
}

pub type GenerateItemsResponse = ApiResponse<Vec<GeneratedItem>>;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogoutRequest {
    pub refresh: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogoutResponse {
    pub success: bool,
}

/// `{ error }` body used by the auth proxies
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProxyErrorResponse {
    pub error: String,
}
