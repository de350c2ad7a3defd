pub mod api;
pub mod config;
pub mod generator;
pub mod oneliner;

use std::sync::Arc;

use axum::Router;

use crate::generator::TextGeneration;

#[derive(Clone)]
pub struct AppState {
    pub generator: TextGeneration,
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}
