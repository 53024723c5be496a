// GET /api/admin/cc-pair/:cc_pair_id/documents

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::AppState;
use crate::client::DocumentSyncSource;
use crate::documents::{DocumentStatusList, ListView};
use crate::error::ApiError;
use crate::middleware::ApiResponse;

#[derive(Debug, Default, Deserialize)]
pub struct DocumentsQuery {
    /// Indexed-document total for the caption; defaults to the fetched count
    pub count: Option<usize>,
}

/// Expanded rendering of one connector pairing's document list
pub async fn documents_get(
    State(state): State<AppState>,
    Path(cc_pair_id): Path<i64>,
    Query(query): Query<DocumentsQuery>,
) -> Result<ApiResponse<ListView>, ApiError> {
    let mut list = DocumentStatusList::new(cc_pair_id, query.count.unwrap_or(0));

    if let Some(request) = list.toggle() {
        let documents = state.backend.docs_sync_status(request.cc_pair_id).await?;
        if query.count.is_none() {
            list.set_documents_count(documents.len());
        }
        list.apply(request, Ok(documents));
    }

    Ok(ApiResponse::success(list.view()))
}
