use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;

/// Health check endpoint. Reports 503 when the engine does not answer.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server and engine are reachable", body = serde_json::Value),
        (status = 503, description = "Engine unreachable", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    match state.client.cluster_health().await {
        Ok(cluster) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "engine": {
                    "cluster_name": cluster.cluster_name,
                    "status": cluster.status,
                    "number_of_nodes": cluster.number_of_nodes,
                },
                "build_profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            })),
        ),
        Err(e) => {
            tracing::warn!("Engine health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "engine_error": e.to_string(),
                })),
            )
        }
    }
}
