use anyhow::Result;
use clap::Args;
use miniapp_api::ApiClient;

use crate::output::{print_json, print_mini_apps_table, OutputFormat};

#[derive(Args)]
pub struct InfoArgs {
    /// Mini app ID to look up
    pub app_id: String,
}

pub async fn run(args: &InfoArgs, client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let info = client.fetch_info(&args.app_id).await?;

    match format {
        OutputFormat::Table => print_mini_apps_table(&[info]),
        OutputFormat::Json => print_json(&info),
    }

    Ok(())
}
