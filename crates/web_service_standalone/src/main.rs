use clap::Parser;
use focus_core::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug, Clone)]
#[command(name = "focus-flow-server")]
#[command(about = "Focus Flow API server: AI subtask generation and auth proxy")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides APP_HOST / config.toml)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides APP_PORT / config.toml)
    #[arg(long)]
    port: Option<u16>,

    /// Log filter, e.g. `info` or `web_service=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    json_logs: bool,
}

fn init_tracing(filter: &str, json: bool) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_line_number(true)
                    .with_file(false),
            )
            .init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing::info!(
        host = %config.host,
        port = config.port,
        base_url = %config.hf_base_url,
        timeout_secs = config.inference_timeout_secs,
        "Starting Focus Flow server"
    );

    if let Err(e) = web_service::run(config).await {
        tracing::error!("Failed to run web service: {:#}", e);
        return Err(e);
    }
    Ok(())
}
