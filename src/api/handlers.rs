use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::AppState;
use crate::generator::GenerationParams;
use crate::oneliner::{creative_prompt, strip_prompt, to_one_liner};

use super::models::{ErrorResponse, GenerateRequest, GeneratedText};

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<Vec<GeneratedText>>, (StatusCode, Json<ErrorResponse>)> {
    tracing::debug!(text = %payload.text, "received text");

    let prompt = creative_prompt(&payload.text);
    tracing::debug!(%prompt, "creative prompt");

    let candidates = state
        .generator
        .generate(&prompt, &GenerationParams::default())
        .await
        .map_err(|err| {
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
        })?;
    tracing::debug!(?candidates, "model result");

    let Some(first) = candidates.into_iter().next() else {
        return Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: "text generation backend returned no candidates".to_string(),
            }),
        ));
    };

    let cleaned = strip_prompt(&prompt, &first.generated_text);
    tracing::debug!(%cleaned, "generated text after cleaning");

    let one_liner = to_one_liner(&cleaned);
    tracing::debug!(%one_liner, "one-liner");

    Ok(Json(vec![GeneratedText {
        generated_text: one_liner,
    }]))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
