use clap::Args;

use crate::cli::{utils, FeatureArgs, OutputFormat, SettingsArgs};
use crate::client::BackendClient;
use crate::config;
use crate::shell::{self, ShellRequest};
use crate::types::Role;

#[derive(Debug, Clone, Args)]
pub struct ShellArgs {
    #[arg(long, default_value = "admin", help = "Viewer role (admin, curator, global-curator, basic, ...)")]
    pub role: Role,

    #[arg(long, help = "Admin page path being rendered, e.g. /admin/users")]
    pub path: Option<String>,

    #[command(flatten)]
    pub features: FeatureArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub async fn handle(args: ShellArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = config::config();
    let backend = BackendClient::new(&config.upstream)?;

    let request = ShellRequest {
        role: args.role,
        path: args.path,
        settings: Some(args.settings.to_settings()),
    };
    let view = shell::resolve(&backend, args.features.resolve(config.features), request).await;

    utils::output_shell(&output_format, &view)
}
