use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use miniapp_api::ApiClient;

#[derive(Args)]
pub struct DownloadArgs {
    /// Absolute URL of the file to download
    pub url: String,

    /// Path to write the downloaded file to
    #[arg(long)]
    pub out: PathBuf,
}

pub async fn run(args: &DownloadArgs, client: &ApiClient) -> Result<()> {
    let bytes = client.download_file(&args.url).await?;

    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;
    eprintln!("Wrote {} bytes to {}", bytes.len(), args.out.display());

    Ok(())
}
