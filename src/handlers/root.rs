use axum::extract::State;
use serde_json::{json, Value};

use super::AppState;
use crate::error::ApiError;
use crate::middleware::ApiResponse;

pub async fn root() -> ApiResponse<Value> {
    let version = env!("CARGO_PKG_VERSION");

    ApiResponse::success(json!({
        "name": "Admin Shell",
        "version": version,
        "description": "Role and feature gated admin navigation plus connector document sync status",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "shell": "POST /api/admin/shell",
            "navigation": "POST /api/admin/navigation",
            "documents": "GET /api/admin/cc-pair/:cc_pair_id/documents[?count=N]",
        }
    }))
}

/// Liveness of this service and reachability of the upstream backend
pub async fn health(State(state): State<AppState>) -> Result<ApiResponse<Value>, ApiError> {
    let now = chrono::Utc::now();

    match state.backend.health().await {
        Ok(()) => Ok(ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "upstream": "ok"
        }))),
        Err(e) => {
            tracing::warn!("Upstream health check failed: {}", e);
            Err(ApiError::service_unavailable(format!("upstream unavailable: {}", e)))
        }
    }
}
