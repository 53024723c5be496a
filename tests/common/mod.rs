#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use admin_shell::client::BackendClient;
use admin_shell::config::FeatureConfig;
use admin_shell::handlers::{self, AppState};

/// In-process stand-in for the backend, bound on a free local port
pub struct Upstream {
    pub base_url: String,
    doc_hits: Arc<AtomicUsize>,
}

impl Upstream {
    pub fn doc_hits(&self) -> usize {
        self.doc_hits.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> BackendClient {
        BackendClient::from_base_url(&self.base_url).expect("valid stub url")
    }
}

#[derive(Clone)]
struct StubState {
    kg_exposed: bool,
    doc_hits: Arc<AtomicUsize>,
}

pub async fn spawn_upstream(kg_exposed: bool) -> Result<Upstream> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind stub upstream")?;

    let doc_hits = Arc::new(AtomicUsize::new(0));
    let state = StubState {
        kg_exposed,
        doc_hits: doc_hits.clone(),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/admin/kg/exposed", get(kg_exposed_get))
        .route(
            "/api/manage/admin/cc-pair/:cc_pair_id/get-docs-sync-status",
            get(docs_sync_status_get),
        )
        .with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(Upstream {
        base_url: format!("http://127.0.0.1:{}", port),
        doc_hits,
    })
}

/// Base url where nothing is listening
pub fn dead_upstream_url() -> String {
    let port = portpicker::pick_unused_port().expect("free port");
    format!("http://127.0.0.1:{}", port)
}

async fn kg_exposed_get(State(state): State<StubState>) -> Json<bool> {
    Json(state.kg_exposed)
}

/// 1: two wiki pages, 2: no documents, 3: garbage body, anything else: 500
async fn docs_sync_status_get(
    State(state): State<StubState>,
    Path(cc_pair_id): Path<i64>,
) -> Response {
    state.doc_hits.fetch_add(1, Ordering::SeqCst);
    match cc_pair_id {
        1 => Json(json!([
            {
                "doc_id": "https://acme.atlassian.net/wiki/spaces/ENG/pages/100/overview",
                "last_synced": "2024-06-01T12:00:00+00:00",
                "last_modified": "2024-05-30T08:00:00+00:00"
            },
            {
                "doc_id": "https://acme.atlassian.net/wiki/spaces/ENG/pages/101/Deploy%20Runbook",
                "last_synced": null,
                "last_modified": null
            }
        ]))
        .into_response(),
        2 => Json(json!([])).into_response(),
        3 => (StatusCode::OK, "not json").into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
    }
}

pub fn app_for(base_url: &str, features: FeatureConfig) -> Router {
    let backend = BackendClient::from_base_url(base_url).expect("valid base url");
    handlers::router(AppState::new(backend, features))
}

pub async fn send(app: Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&bytes).context("response body is not JSON")?;
    Ok((status, body))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}
