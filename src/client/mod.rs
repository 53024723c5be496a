//! HTTP client for the upstream backend.
//!
//! The shell only reads from two endpoints: the knowledge-graph exposure flag
//! and the per-connector document sync status. Both are behind traits so the
//! shell and the document list can be driven by fakes in tests.

pub mod error;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::config::UpstreamConfig;
use crate::documents::DocumentSyncStatus;

pub use error::ClientError;

pub const KG_EXPOSED_PATH: &str = "api/admin/kg/exposed";
pub const HEALTH_PATH: &str = "health";

pub fn docs_sync_status_path(cc_pair_id: i64) -> String {
    format!("api/manage/admin/cc-pair/{}/get-docs-sync-status", cc_pair_id)
}

/// Source of the knowledge-graph exposure flag
#[async_trait]
pub trait FeatureFlagSource: Send + Sync {
    async fn kg_exposed(&self) -> Result<bool, ClientError>;
}

/// Source of document sync records for a connector pairing
#[async_trait]
pub trait DocumentSyncSource: Send + Sync {
    async fn docs_sync_status(&self, cc_pair_id: i64) -> Result<Vec<DocumentSyncStatus>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl BackendClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: normalize_base(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    /// Client with default settings against `base_url`
    pub fn from_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ok when the backend answers its health endpoint with a 2xx
    pub async fn health(&self) -> Result<(), ClientError> {
        let url = self.base_url.join(HEALTH_PATH)?;
        let response = self.http.get(url).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::from_status(response.status()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.base_url.join(path)?;
        tracing::debug!(%url, "backend GET");

        let mut request = self.http.get(url.clone());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "backend request failed");
            return Err(ClientError::from_status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FeatureFlagSource for BackendClient {
    async fn kg_exposed(&self) -> Result<bool, ClientError> {
        self.get_json(KG_EXPOSED_PATH).await
    }
}

#[async_trait]
impl DocumentSyncSource for BackendClient {
    async fn docs_sync_status(&self, cc_pair_id: i64) -> Result<Vec<DocumentSyncStatus>, ClientError> {
        self.get_json(&docs_sync_status_path(cc_pair_id)).await
    }
}

/// Parse the base URL and make sure relative joins append to its path
fn normalize_base(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(format!("'{}' cannot be a base url", raw)));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoints_below_base_path() {
        let client = BackendClient::from_base_url("http://backend.local:8080/api-proxy").unwrap();
        let url = client.base_url().join(&docs_sync_status_path(12)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://backend.local:8080/api-proxy/api/manage/admin/cc-pair/12/get-docs-sync-status"
        );
    }

    #[test]
    fn bare_host_base() {
        let client = BackendClient::from_base_url("http://localhost:8080").unwrap();
        let url = client.base_url().join(KG_EXPOSED_PATH).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/admin/kg/exposed");
    }

    #[test]
    fn rejects_invalid_base() {
        assert!(matches!(
            BackendClient::from_base_url("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            BackendClient::from_base_url("mailto:admin@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}
