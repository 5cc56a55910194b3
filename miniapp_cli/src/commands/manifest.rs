use anyhow::Result;
use clap::Args;
use miniapp_api::ApiClient;

use crate::output::{print_json, print_manifest_table, OutputFormat};

#[derive(Args)]
pub struct ManifestArgs {
    /// Mini app ID
    pub mini_app_id: String,

    /// Version ID of the mini app
    pub version_id: String,
}

pub async fn run(args: &ManifestArgs, client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let manifest = client
        .fetch_file_list(&args.mini_app_id, &args.version_id)
        .await?;

    match format {
        OutputFormat::Table => print_manifest_table(&manifest),
        OutputFormat::Json => print_json(&manifest),
    }

    Ok(())
}
