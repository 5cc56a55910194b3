mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use miniapp_api::{ApiClient, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "miniapp")]
#[command(about = "Query the mini-app backend and download packaged files")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List mini apps visible to the host app
    List,
    /// Show metadata for one mini app
    Info(commands::info::InfoArgs),
    /// List the files of a mini app version
    Manifest(commands::manifest::ManifestArgs),
    /// Download a packaged file to disk
    Download(commands::download::DownloadArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("miniapp=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = client_from_env()?;

    match &cli.command {
        Commands::List => commands::list::run(&client, &format).await?,
        Commands::Info(args) => commands::info::run(args, &client, &format).await?,
        Commands::Manifest(args) => commands::manifest::run(args, &client, &format).await?,
        Commands::Download(args) => commands::download::run(args, &client).await?,
    }

    Ok(())
}

fn client_from_env() -> Result<ApiClient> {
    dotenvy::dotenv().ok();

    let base_url = std::env::var("MINIAPP_BASE_URL").context("MINIAPP_BASE_URL is not set")?;
    let host_app_id =
        std::env::var("MINIAPP_HOST_APP_ID").context("MINIAPP_HOST_APP_ID is not set")?;
    let subscription_key =
        std::env::var("MINIAPP_SUBSCRIPTION_KEY").context("MINIAPP_SUBSCRIPTION_KEY is not set")?;
    let host_app_version =
        std::env::var("MINIAPP_HOST_APP_VERSION").context("MINIAPP_HOST_APP_VERSION is not set")?;
    let test_mode = matches!(
        std::env::var("MINIAPP_TEST_MODE").as_deref(),
        Ok("1") | Ok("true")
    );

    let config = ClientConfig::new(&base_url, &host_app_id, &subscription_key, &host_app_version)
        .test_mode(test_mode);
    Ok(ApiClient::new(config)?)
}
