use clap::Args;

use crate::cli::{utils, FeatureArgs, OutputFormat, SettingsArgs};
use crate::config;
use crate::navigation;
use crate::types::Role;

#[derive(Debug, Clone, Args)]
pub struct NavArgs {
    #[arg(long, default_value = "admin", help = "Viewer role (admin, curator, global-curator, basic, ...)")]
    pub role: Role,

    #[arg(long, help = "Knowledge graph is exposed")]
    pub kg: bool,

    #[command(flatten)]
    pub features: FeatureArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

pub async fn handle(args: NavArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let features = args.features.resolve(config::config().features);
    let settings = args.settings.to_settings();

    let sections = navigation::compose(
        args.role,
        features.enterprise_enabled,
        features.cloud_enabled,
        Some(&settings),
        Some(args.kg),
    );

    utils::output_sections(&output_format, &sections)
}
