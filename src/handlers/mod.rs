pub mod documents;
pub mod root;
pub mod shell;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::client::BackendClient;
use crate::config::{FeatureConfig, ServerConfig};

/// Shared handler state: one backend client for the process plus the
/// deployment's capability flags
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub features: FeatureConfig,
}

impl AppState {
    pub fn new(backend: BackendClient, features: FeatureConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            features,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root::root))
        .route("/health", get(root::health))
        // Admin shell
        .route("/api/admin/shell", post(shell::shell_post))
        .route("/api/admin/navigation", post(shell::navigation_post))
        .route(
            "/api/admin/cc-pair/:cc_pair_id/documents",
            get(documents::documents_get),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS restricted to the configured frontend origins
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
