use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::dto::{ApiResponse, ProxyErrorResponse};
use crate::services::subtask_generator::GenerationError;
use crate::services::token_service::TokenServiceError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const AUTHENTICATION_FAILED_MESSAGE: &str = "Authentication failed";
pub const LOGOUT_FAILED_MESSAGE: &str = "Logout failed";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The request body could not be read; the detail is logged, not returned
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Logout failed: {0}")]
    LogoutFailed(String),
}

impl AppError {
    pub fn login(err: TokenServiceError) -> Self {
        AppError::AuthenticationFailed(err.to_string())
    }

    pub fn logout(err: TokenServiceError) -> Self {
        AppError::LogoutFailed(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            AppError::LogoutFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        match self {
            AppError::Generation(err) => {
                HttpResponse::build(status_code).json(ApiResponse::error(err.to_string()))
            }
            AppError::MalformedRequest(_) => {
                HttpResponse::build(status_code).json(ApiResponse::error(SERVER_ERROR_MESSAGE))
            }
            AppError::AuthenticationFailed(_) => {
                HttpResponse::build(status_code).json(ProxyErrorResponse {
                    error: AUTHENTICATION_FAILED_MESSAGE.to_string(),
                })
            }
            AppError::LogoutFailed(_) => HttpResponse::build(status_code).json(ProxyErrorResponse {
                error: LOGOUT_FAILED_MESSAGE.to_string(),
            }),
        }
    }
}
