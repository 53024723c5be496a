use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::client::{BackendClient, FeatureFlagSource};
use crate::config;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();
    let backend = BackendClient::new(&config.upstream)?;
    let kg_exposed = backend.kg_exposed().await?;

    utils::output_value(
        &output_format,
        "flags",
        json!({
            "enterprise_enabled": config.features.enterprise_enabled,
            "cloud_enabled": config.features.cloud_enabled,
            "kg_exposed": kg_exposed,
        }),
        &format!(
            "enterprise: {}\ncloud: {}\nknowledge graph exposed: {}",
            config.features.enterprise_enabled, config.features.cloud_enabled, kg_exposed
        ),
    )
}
