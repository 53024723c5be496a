pub mod commands;
pub mod utils;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::FeatureConfig;
use crate::types::{ApplicationStatus, QueryHistoryMode, WorkspaceSettings};

#[derive(Parser)]
#[command(name = "admin-shell")]
#[command(about = "Admin shell CLI - inspect the admin menu and connector document sync status")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the admin menu for a role and set of flags (no backend call)")]
    Nav {
        #[command(flatten)]
        args: commands::nav::NavArgs,
    },

    #[command(about = "Resolve the admin layout against the backend")]
    Shell {
        #[command(flatten)]
        args: commands::shell::ShellArgs,
    },

    #[command(about = "Expand the indexed document list of a connector pairing")]
    Docs {
        #[command(flatten)]
        args: commands::docs::DocsArgs,
    },

    #[command(about = "Show the knowledge graph exposure flag")]
    Flags,
}

/// Deployment capability switches; either flag also turns on when set in the environment
#[derive(Debug, Clone, Args)]
pub struct FeatureArgs {
    #[arg(long, help = "Treat the deployment as enterprise edition")]
    pub enterprise: bool,

    #[arg(long, help = "Treat the deployment as cloud hosted")]
    pub cloud: bool,
}

impl FeatureArgs {
    pub fn resolve(&self, configured: FeatureConfig) -> FeatureConfig {
        FeatureConfig {
            enterprise_enabled: self.enterprise || configured.enterprise_enabled,
            cloud_enabled: self.cloud || configured.cloud_enabled,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    #[arg(long, help = "Query history mode: normal, anonymized or disabled")]
    pub query_history: Option<QueryHistoryMode>,

    #[arg(long, help = "Flag search settings as needing a reindex")]
    pub needs_reindexing: bool,

    #[arg(long, help = "Workspace has a payment reminder due")]
    pub payment_reminder: bool,
}

impl SettingsArgs {
    pub fn to_settings(&self) -> WorkspaceSettings {
        WorkspaceSettings {
            application_status: self
                .payment_reminder
                .then_some(ApplicationStatus::PaymentReminder),
            query_history_mode: self.query_history,
            needs_reindexing: Some(self.needs_reindexing),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Nav { args } => commands::nav::handle(args, output_format).await,
        Commands::Shell { args } => commands::shell::handle(args, output_format).await,
        Commands::Docs { args } => commands::docs::handle(args, output_format).await,
        Commands::Flags => commands::flags::handle(output_format).await,
    }
}
