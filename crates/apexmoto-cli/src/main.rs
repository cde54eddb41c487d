mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "apexmoto-cli")]
#[command(about = "APEX MOTO storefront command line interface")]
struct Cli {
    /// Channel slug; defaults to `STOREFRONT_DEFAULT_CHANNEL`
    #[arg(long, global = true)]
    channel: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a storefront page to HTML
    Render {
        /// Channel-relative path, e.g. `/categories/helmets`
        #[arg(default_value = "/")]
        path: String,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a navigation menu
    Menu {
        /// Menu slug (`navbar` or `footer`)
        #[arg(long, default_value = "navbar")]
        slug: String,
    },
    /// Print the products shown in the home page grid
    Featured,
    /// List sales channels (requires `SALEOR_APP_TOKEN`)
    Channels,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = apexmoto_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = apexmoto_saleor::SaleorClient::from_app_config(&config)?;
    let channel = cli
        .channel
        .unwrap_or_else(|| config.default_channel.clone());

    match cli.command {
        Commands::Render { path, out } => {
            commands::run_render(&config, client, &channel, &path, out.as_deref()).await?;
        }
        Commands::Menu { slug } => commands::run_menu(&client, &channel, &slug).await?,
        Commands::Featured => commands::run_featured(&config, &client, &channel).await?,
        Commands::Channels => commands::run_channels(&client).await?,
    }

    Ok(())
}
