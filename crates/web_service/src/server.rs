use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use focus_core::Config;

use crate::controllers::{auth_controller, generate_items_controller, system_controller};
use crate::middleware::TracingMiddleware;
use crate::services::{SubtaskGenerator, TokenServiceClient};

pub struct AppState {
    pub subtask_generator: SubtaskGenerator,
    pub token_service: TokenServiceClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let subtask_generator = SubtaskGenerator::from_config(config)
            .context("Failed to build inference client")?;
        let token_service = TokenServiceClient::new(config.token_service_url.clone())
            .context("Failed to build token service client")?;

        Ok(Self {
            subtask_generator,
            token_service,
        })
    }
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(generate_items_controller::config)
            .configure(auth_controller::config)
            .configure(system_controller::config),
    );
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let app_state = web::Data::new(AppState::from_config(&config)?);

    if app_state.subtask_generator.is_configured() {
        tracing::info!(
            language = ?app_state.subtask_generator.language(),
            "Subtask generation enabled"
        );
    } else {
        tracing::warn!(
            "HF_MODEL or HF_TOKEN is not set; /api/generate-items will answer with an error"
        );
    }
    tracing::info!(token_service = %app_state.token_service.base_url(), "Auth proxy target");

    let bind_addr = format!("{}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingMiddleware)
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind server to {bind_addr}"))?
    .run();

    tracing::info!("Starting web service on http://{bind_addr}");

    server.await.context("Web server error")
}
