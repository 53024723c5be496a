//! Lazily loaded document list for one connector pairing.
//!
//! The list fetches its documents the first time it is expanded and keeps
//! them for the rest of its life. Later toggles only flip visibility. Loading
//! is split in two steps so the owner can drive it from an event loop:
//! [`DocumentStatusList::toggle`] hands out a [`FetchRequest`] when a fetch is
//! due, and [`DocumentStatusList::apply`] stores the outcome. Dropping the list
//! drops any pending request's target with it.

use serde::Serialize;
use std::fmt;

use super::{DocumentRow, DocumentSyncStatus};
use crate::client::{ClientError, DocumentSyncSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded(Vec<DocumentSyncStatus>),
    Failed(String),
}

/// Ticket for the single fetch an expansion requires
#[must_use = "a fetch request must be executed and applied"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub cc_pair_id: i64,
    generation: u64,
}

/// Read-only view of the list's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState<'a> {
    pub items: &'a [DocumentSyncStatus],
    pub expanded: bool,
    pub loading: bool,
    pub error_message: Option<&'a str>,
}

#[derive(Debug)]
pub struct DocumentStatusList {
    cc_pair_id: i64,
    documents_count: usize,
    expanded: bool,
    load: LoadState,
    generation: u64,
}

impl DocumentStatusList {
    /// `documents_count` is the indexed-document total shown on the toggle
    pub fn new(cc_pair_id: i64, documents_count: usize) -> Self {
        Self {
            cc_pair_id,
            documents_count,
            expanded: false,
            load: LoadState::Unloaded,
            generation: 0,
        }
    }

    pub fn cc_pair_id(&self) -> i64 {
        self.cc_pair_id
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn set_documents_count(&mut self, documents_count: usize) {
        self.documents_count = documents_count;
    }

    /// Flip visibility. Returns a fetch request only on the first expansion
    /// of an unloaded list; every other toggle reuses what is cached.
    pub fn toggle(&mut self) -> Option<FetchRequest> {
        self.expanded = !self.expanded;
        if !self.expanded {
            return None;
        }

        match self.load {
            LoadState::Unloaded => {
                self.load = LoadState::Loading;
                tracing::debug!(cc_pair_id = self.cc_pair_id, "document list loading");
                Some(FetchRequest {
                    cc_pair_id: self.cc_pair_id,
                    generation: self.generation,
                })
            }
            LoadState::Loading | LoadState::Loaded(_) | LoadState::Failed(_) => None,
        }
    }

    /// Store the outcome of a fetch. Results for a request this list did not
    /// issue, or issued before a [`reset`](Self::reset), are ignored.
    pub fn apply(
        &mut self,
        request: FetchRequest,
        result: Result<Vec<DocumentSyncStatus>, ClientError>,
    ) {
        if request.generation != self.generation
            || request.cc_pair_id != self.cc_pair_id
            || self.load != LoadState::Loading
        {
            tracing::debug!(
                cc_pair_id = self.cc_pair_id,
                "ignoring stale document fetch result"
            );
            return;
        }

        self.load = match result {
            Ok(documents) => {
                tracing::debug!(
                    cc_pair_id = self.cc_pair_id,
                    count = documents.len(),
                    "document list loaded"
                );
                LoadState::Loaded(documents)
            }
            Err(err) => {
                tracing::warn!(cc_pair_id = self.cc_pair_id, error = %err, "document list fetch failed");
                LoadState::Failed(format!("Failed to fetch documents: {}", err))
            }
        };
    }

    /// Toggle and, when the toggle asks for it, fetch from `source` and apply
    pub async fn toggle_with<S>(&mut self, source: &S)
    where
        S: DocumentSyncSource + ?Sized,
    {
        if let Some(request) = self.toggle() {
            let result = source.docs_sync_status(request.cc_pair_id).await;
            self.apply(request, result);
        }
    }

    /// Forget cached documents so the next expansion fetches again
    pub fn reset(&mut self) {
        self.generation += 1;
        self.expanded = false;
        self.load = LoadState::Unloaded;
    }

    pub fn state(&self) -> ListState<'_> {
        let items: &[DocumentSyncStatus] = match &self.load {
            LoadState::Loaded(documents) => documents.as_slice(),
            _ => &[],
        };
        let error_message = match &self.load {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        };
        ListState {
            items,
            expanded: self.expanded,
            loading: self.load == LoadState::Loading,
            error_message,
        }
    }

    pub fn view(&self) -> ListView {
        let body = self.expanded.then(|| match &self.load {
            LoadState::Unloaded | LoadState::Loading => ListBody::Loading,
            LoadState::Failed(message) => ListBody::Failed {
                message: message.clone(),
            },
            LoadState::Loaded(documents) if documents.is_empty() => ListBody::Empty,
            LoadState::Loaded(documents) => ListBody::Rows {
                total: documents.len(),
                rows: documents.iter().map(DocumentRow::from).collect(),
            },
        });

        ListView {
            caption: format!("View {} indexed documents", self.documents_count),
            expanded: self.expanded,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListBody {
    Loading,
    Failed { message: String },
    Empty,
    Rows { total: usize, rows: Vec<DocumentRow> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub caption: String,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ListBody>,
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.expanded { "▲" } else { "▼" };
        writeln!(f, "{} {}", self.caption, marker)?;

        match &self.body {
            None => Ok(()),
            Some(ListBody::Loading) => writeln!(f, "  Loading documents..."),
            Some(ListBody::Failed { message }) => writeln!(f, "  {}", message),
            Some(ListBody::Empty) => writeln!(f, "  No documents found."),
            Some(ListBody::Rows { total, rows }) => {
                writeln!(f, "  Indexed Documents ({} total)", total)?;
                for row in rows {
                    writeln!(f, "  - {}", row.name)?;
                    writeln!(f, "    Last synced: {}", row.last_synced)?;
                    writeln!(f, "    {}", row.link)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
        documents: Vec<DocumentSyncStatus>,
    }

    impl CountingSource {
        fn ok(documents: Vec<DocumentSyncStatus>) -> Self {
            Self { calls: AtomicUsize::new(0), fail: false, documents }
        }

        fn failing() -> Self {
            Self { calls: AtomicUsize::new(0), fail: true, documents: Vec::new() }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentSyncSource for CountingSource {
        async fn docs_sync_status(&self, _cc_pair_id: i64) -> Result<Vec<DocumentSyncStatus>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ClientError::Transport("connection refused".into()))
            } else {
                Ok(self.documents.clone())
            }
        }
    }

    fn sample() -> Vec<DocumentSyncStatus> {
        vec![
            DocumentSyncStatus::new("https://w.example/wiki/spaces/ENG/pages/1/overview")
                .with_last_synced("2024-02-03T04:05:06Z"),
            DocumentSyncStatus::new("https://w.example/wiki/spaces/ENG/pages/2/Setup+Guide"),
        ]
    }

    #[test]
    fn starts_collapsed_and_unloaded() {
        let list = DocumentStatusList::new(7, 2);
        let state = list.state();
        assert!(!state.expanded);
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.error_message, None);
        assert_eq!(list.view().body, None);
    }

    #[tokio::test]
    async fn first_expansion_fetches_once() {
        let source = CountingSource::ok(sample());
        let mut list = DocumentStatusList::new(7, 2);

        list.toggle_with(&source).await;
        assert_eq!(source.calls(), 1);
        assert!(list.is_expanded());
        assert_eq!(list.state().items.len(), 2);

        // collapse, expand again: served from cache
        list.toggle_with(&source).await;
        list.toggle_with(&source).await;
        assert_eq!(source.calls(), 1);
        assert!(list.is_expanded());
        assert_eq!(list.state().items.len(), 2);
    }

    #[test]
    fn toggling_while_loading_issues_no_second_request() {
        let mut list = DocumentStatusList::new(3, 0);
        let request = list.toggle().unwrap();
        assert!(list.state().loading);

        assert_eq!(list.toggle(), None);
        assert_eq!(list.toggle(), None);
        assert!(list.state().loading);

        list.apply(request, Ok(sample()));
        assert!(!list.state().loading);
        assert_eq!(list.state().items.len(), 2);
    }

    #[test]
    fn collapsing_keeps_cache() {
        let mut list = DocumentStatusList::new(3, 2);
        let request = list.toggle().unwrap();
        list.apply(request, Ok(sample()));

        assert_eq!(list.toggle(), None);
        assert!(!list.is_expanded());
        assert_eq!(list.state().items.len(), 2);
    }

    #[tokio::test]
    async fn failure_sets_message_and_leaves_items_empty() {
        let source = CountingSource::failing();
        let mut list = DocumentStatusList::new(9, 4);

        list.toggle_with(&source).await;
        let state = list.state();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error_message,
            Some("Failed to fetch documents: connection refused")
        );

        // errored lists are not retried by toggling
        list.toggle_with(&source).await;
        list.toggle_with(&source).await;
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn reset_allows_a_new_fetch() {
        let source = CountingSource::ok(sample());
        let mut list = DocumentStatusList::new(1, 2);
        list.toggle_with(&source).await;
        list.reset();
        assert!(!list.is_expanded());
        assert!(list.state().items.is_empty());

        list.toggle_with(&source).await;
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn results_from_before_reset_are_ignored() {
        let mut list = DocumentStatusList::new(1, 2);
        let stale = list.toggle().unwrap();
        list.reset();
        let fresh = list.toggle().unwrap();

        list.apply(stale, Ok(sample()));
        assert!(list.state().loading);

        list.apply(fresh, Ok(Vec::new()));
        assert_eq!(list.load_state(), &LoadState::Loaded(Vec::new()));
    }

    #[test]
    fn view_projects_each_phase() {
        let mut list = DocumentStatusList::new(5, 2);
        assert_eq!(list.view().caption, "View 2 indexed documents");

        let request = list.toggle().unwrap();
        assert_eq!(list.view().body, Some(ListBody::Loading));

        list.apply(request, Ok(sample()));
        match list.view().body {
            Some(ListBody::Rows { total, rows }) => {
                assert_eq!(total, 2);
                assert_eq!(rows[0].name, "Space Overview");
                assert_eq!(rows[0].last_synced, "2/3/2024");
                assert_eq!(rows[1].name, "Setup Guide");
                assert_eq!(rows[1].last_synced, "Never");
            }
            other => panic!("unexpected body: {:?}", other),
        }

        let text = list.view().to_string();
        assert!(text.contains("Indexed Documents (2 total)"));
        assert!(text.contains("Last synced: Never"));
    }

    #[test]
    fn view_for_empty_result() {
        let mut list = DocumentStatusList::new(5, 0);
        let request = list.toggle().unwrap();
        list.apply(request, Ok(Vec::new()));
        assert_eq!(list.view().body, Some(ListBody::Empty));
        assert!(list.view().to_string().contains("No documents found."));
    }
}
