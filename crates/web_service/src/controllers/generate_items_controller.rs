//! `POST /generate-items`: AI subtask generation for a task

use actix_web::{
    error::JsonPayloadError,
    web::{self, Data, Json},
    HttpRequest, HttpResponse,
};

use crate::{
    dto::{ApiResponse, GenerateItemsRequest},
    error::{AppError, Result},
    middleware::extract_trace_id,
    server::AppState,
};

pub const SUCCESS_MESSAGE: &str = "Task items successfully generated";

pub async fn generate_items(
    app_state: Data<AppState>,
    req: Json<GenerateItemsRequest>,
    http_req: HttpRequest,
) -> Result<HttpResponse> {
    let trace_id = extract_trace_id(&http_req).unwrap_or_default();
    let task = req.into_inner().task;

    match app_state.subtask_generator.generate(&task).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(SUCCESS_MESSAGE, items))),
        Err(err) => {
            tracing::error!(
                trace_id = %trace_id,
                task_title = %task.title,
                error = %err,
                "Failed to generate subtasks"
            );
            Err(err.into())
        }
    }
}

/// Unreadable bodies get the generic error envelope instead of actix's 400
fn malformed_request(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        trace_id = %extract_trace_id(req).unwrap_or_default(),
        error = %err,
        "Rejected malformed generate-items request"
    );
    AppError::MalformedRequest(err.to_string()).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generate-items")
            .app_data(web::JsonConfig::default().error_handler(malformed_request))
            .route(web::post().to(generate_items)),
    );
}
