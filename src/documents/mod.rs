pub mod list;
pub mod naming;

use serde::{Deserialize, Serialize};

pub use list::{DocumentStatusList, FetchRequest, ListBody, ListState, ListView, LoadState};
pub use naming::{display_last_synced, display_name};

/// Per-document sync metadata as returned by the backend.
/// Timestamps are kept as received and parsed only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSyncStatus {
    pub doc_id: String,
    #[serde(default)]
    pub last_synced: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl DocumentSyncStatus {
    pub fn new(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            last_synced: None,
            last_modified: None,
        }
    }

    pub fn with_last_synced(mut self, ts: impl Into<String>) -> Self {
        self.last_synced = Some(ts.into());
        self
    }

    pub fn with_last_modified(mut self, ts: impl Into<String>) -> Self {
        self.last_modified = Some(ts.into());
        self
    }
}

/// One rendered line of the document list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub name: String,
    pub last_synced: String,
    /// The raw document id, opened as an external link
    pub link: String,
}

impl From<&DocumentSyncStatus> for DocumentRow {
    fn from(doc: &DocumentSyncStatus) -> Self {
        Self {
            name: display_name(&doc.doc_id),
            last_synced: display_last_synced(doc.last_synced.as_deref()),
            link: doc.doc_id.clone(),
        }
    }
}
