mod handlers;
mod models;

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::AppState;

pub use handlers::{generate, not_found};
pub use models::{ErrorResponse, GenerateRequest, GeneratedText};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .fallback(not_found)
        .with_state(state)
}
