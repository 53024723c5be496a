// POST /api/admin/shell and POST /api/admin/navigation

use axum::{extract::State, Json};
use serde::Deserialize;

use super::AppState;
use crate::middleware::ApiResponse;
use crate::navigation::{self, NavSection};
use crate::shell::{self, ShellRequest, ShellView};
use crate::types::{Role, WorkspaceSettings};

/// Resolve the full admin layout, fetching the knowledge-graph flag upstream
pub async fn shell_post(
    State(state): State<AppState>,
    Json(request): Json<ShellRequest>,
) -> ApiResponse<ShellView> {
    tracing::debug!(role = ?request.role, path = ?request.path, "resolving admin shell");
    let view = shell::resolve(state.backend.as_ref(), state.features, request).await;
    ApiResponse::success(view)
}

#[derive(Debug, Deserialize)]
pub struct NavigationRequest {
    pub role: Role,
    #[serde(default)]
    pub settings: Option<WorkspaceSettings>,
    #[serde(default)]
    pub kg_exposed: Option<bool>,
}

/// Compose the menu from caller-supplied flags, without any upstream call
pub async fn navigation_post(
    State(state): State<AppState>,
    Json(request): Json<NavigationRequest>,
) -> ApiResponse<Vec<NavSection>> {
    let sections = navigation::compose(
        request.role,
        state.features.enterprise_enabled,
        state.features.cloud_enabled,
        request.settings.as_ref(),
        request.kg_exposed,
    );
    ApiResponse::success(sections)
}
