//! Login and logout proxies in front of the token service

use actix_web::{
    error::JsonPayloadError,
    web::{self, Data, Json},
    HttpRequest, HttpResponse,
};

use crate::{
    dto::{LoginCredentials, LogoutRequest, LogoutResponse},
    error::{AppError, Result},
    server::AppState,
};

pub async fn login(
    app_state: Data<AppState>,
    credentials: Json<LoginCredentials>,
) -> Result<HttpResponse> {
    let credentials = credentials.into_inner();
    let token_pair = app_state
        .token_service
        .obtain_token_pair(&credentials)
        .await
        .map_err(|err| {
            tracing::warn!(username = %credentials.username, error = %err, "Login failed");
            AppError::login(err)
        })?;

    tracing::info!(username = %credentials.username, "User logged in");
    Ok(HttpResponse::Ok().json(token_pair))
}

pub async fn logout(app_state: Data<AppState>, req: Json<LogoutRequest>) -> Result<HttpResponse> {
    app_state
        .token_service
        .blacklist(&req.refresh)
        .await
        .map_err(|err| {
            tracing::warn!(error = %err, "Logout failed");
            AppError::logout(err)
        })?;

    Ok(HttpResponse::Ok().json(LogoutResponse { success: true }))
}

fn malformed_login(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::AuthenticationFailed(err.to_string()).into()
}

fn malformed_logout(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::LogoutFailed(err.to_string()).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .app_data(web::JsonConfig::default().error_handler(malformed_login))
                    .route(web::post().to(login)),
            )
            .service(
                web::resource("/logout")
                    .app_data(web::JsonConfig::default().error_handler(malformed_logout))
                    .route(web::post().to(logout)),
            ),
    );
}
