mod commands;
mod output;
mod server;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pokedex_lib::{ApiGateway, Config, PokedexService};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse Pokemon data aggregated from PokeAPI")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Upstream API base URL (overrides POKEDEX_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one Pokemon by name or National Dex number
    Show(commands::show::ShowArgs),
    /// List the catalog page by page
    List(commands::list::ListArgs),
    /// Search by exact name, falling back to a name substring match
    Search(commands::search::SearchArgs),
    /// List the elemental types
    Types,
    /// List the Pokemon of one type
    Type(commands::types::TypeArgs),
    /// Serve the JSON HTTP API
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pokedex=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(&cli.output);

    let mut config = Config::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let gateway = ApiGateway::new(&config)?;
    tracing::debug!("upstream base URL: {}", gateway.base_url());
    let service = PokedexService::new(Arc::new(gateway));

    match &cli.command {
        Commands::Show(args) => commands::show::run(args, &service, &format).await?,
        Commands::List(args) => commands::list::run(args, &service, &format).await?,
        Commands::Search(args) => commands::search::run(args, &service, &format).await?,
        Commands::Types => commands::types::run_list(&service, &format).await?,
        Commands::Type(args) => commands::types::run_members(args, &service, &format).await?,
        Commands::Serve(args) => commands::serve::run(args, service).await?,
    }

    Ok(())
}
