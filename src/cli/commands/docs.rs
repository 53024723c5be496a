use clap::Args;

use crate::cli::{utils, OutputFormat};
use crate::client::BackendClient;
use crate::config;
use crate::documents::{DocumentStatusList, LoadState};

#[derive(Debug, Clone, Args)]
pub struct DocsArgs {
    #[arg(help = "Connector pairing id")]
    pub cc_pair_id: i64,

    #[arg(long, help = "Indexed document total shown in the caption (defaults to the fetched count)")]
    pub count: Option<usize>,
}

pub async fn handle(args: DocsArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let backend = BackendClient::new(&config::config().upstream)?;

    let mut list = DocumentStatusList::new(args.cc_pair_id, args.count.unwrap_or(0));
    list.toggle_with(&backend).await;

    let fetched = match list.load_state() {
        LoadState::Failed(message) => anyhow::bail!("{}", message),
        LoadState::Loaded(documents) => Some(documents.len()),
        LoadState::Unloaded | LoadState::Loading => None,
    };
    if let (None, Some(fetched)) = (args.count, fetched) {
        list.set_documents_count(fetched);
    }

    let view = list.view();
    match output_format {
        OutputFormat::Json => utils::print_json(&view),
        OutputFormat::Text => {
            print!("{}", view);
            Ok(())
        }
    }
}
