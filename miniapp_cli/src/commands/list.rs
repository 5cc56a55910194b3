use anyhow::Result;
use miniapp_api::ApiClient;

use crate::output::{print_json, print_mini_apps_table, OutputFormat};

pub async fn run(client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let apps = client.list().await?;

    match format {
        OutputFormat::Table => print_mini_apps_table(&apps),
        OutputFormat::Json => print_json(&apps),
    }

    Ok(())
}
