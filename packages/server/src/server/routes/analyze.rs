use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::pipeline::analyze_essay;
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing key is treated as an empty essay
    #[serde(default)]
    pub essay: String,
}

/// Analyze an essay: extract claims, then find supporting articles per claim.
///
/// - 400 when the essay is empty or missing (no upstream calls are made)
/// - 200 with `{claims, results}` otherwise
/// - 500 with `{error}` for anything that escapes the pipeline
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Response {
    if payload.essay.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No essay provided"})),
        )
            .into_response();
    }

    match analyze_essay(&state.deps, &payload.essay).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Essay analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
