//! HTTP route handlers for the Veritext analysis API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::services::ServeDir;

use crate::analysis::{self, AnalysisResult, AnalyzeRequest};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze_content))
        .nest_service("/", ServeDir::new("static").fallback(ServeDir::new("static")))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "veritext",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handle content analysis requests.
///
/// Blank input is rejected before any remote call. A reply that will not
/// parse still produces a `200` carrying a degraded record; only a failed
/// outbound call is surfaced as an error response.
async fn analyze_content(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, String)> {
    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Text content is required".to_string(),
        ));
    }

    let prompt = analysis::build_analysis_prompt(&request.text);

    let reply = state
        .completions
        .complete(analysis::ANALYST_SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| {
            tracing::error!("Completion call failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "Analysis service unavailable".to_string(),
            )
        })?;

    Ok(Json(analysis::normalize(Some(&reply))))
}
