use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use weather_quip_service::{AppState, build_app, config::AppConfig, generator::TextGeneration, run_server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .init();

    let AppConfig {
        port,
        backend_url,
        model,
        timeout_ms,
    } = AppConfig::from_env();

    tracing::info!(port, %backend_url, %model, "starting weather quip service");

    let state = Arc::new(AppState {
        generator: TextGeneration::new(backend_url, model, timeout_ms),
    });

    run_server(build_app(state), port).await;
}
