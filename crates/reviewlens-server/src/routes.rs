use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use reviewlens_core::models::ClassificationResult;
use reviewlens_pipeline::{AnalyzeError, AnalyzeRequest};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const SCRIPT_JS: &str = include_str!("../assets/script.js");

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(state)
}

/// A body that is not a JSON object with a string `url` is treated as
/// carrying no URL.
async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<ClassificationResult>>, ApiError> {
    let request: AnalyzeRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!(error = %e, "unparseable analyze body");
        AnalyzeRequest::default()
    });
    let service = state.service.clone();
    let results = tokio::task::spawn_blocking(move || service.analyze(&request))
        .await
        .map_err(|e| AnalyzeError::Internal(e.to_string()))??;
    Ok(Json(results))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let models = state.service.models();
    Json(json!({
        "status": "ok",
        "vocab_size": models.vocab_size(),
        "dimensions": models.dimensions(),
    }))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
