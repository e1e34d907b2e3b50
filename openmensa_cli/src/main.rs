mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use openmensa_lib::ClientConfig;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "openmensa")]
#[command(about = "Browse canteens and their daily meals from OpenMensa")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides OPENMENSA_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Canteens per page request (overrides OPENMENSA_PAGE_SIZE)
    #[arg(long, global = true)]
    page_size: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all canteens
    Canteens(commands::canteens::CanteensArgs),
    /// Show the meals of one canteen on one day
    Meals(commands::meals::MealsArgs),
    /// Interactive menu (default)
    Menu,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("openmensa=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::from_name(&cli.output);

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size)?;
    }
    let client = config.build_client()?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Canteens(args) => {
            commands::canteens::run(&args, client, &config, &format).await?
        }
        Commands::Meals(args) => commands::meals::run(&args, client, &format).await?,
        Commands::Menu => commands::menu::run(client, &config, &format).await?,
    }

    Ok(())
}
