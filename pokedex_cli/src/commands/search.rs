use anyhow::Result;
use clap::Args;
use pokedex_lib::PokedexService;

use crate::output::{print_page, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Exact name or id, or part of a name
    pub query: String,
}

pub async fn run(args: &SearchArgs, service: &PokedexService, format: &OutputFormat) -> Result<()> {
    let page = service.search(&args.query).await?;

    if page.items.is_empty() {
        eprintln!("No Pokemon match '{}'", args.query.trim());
    } else {
        eprintln!("{} match(es)", page.total_count);
    }

    print_page(&page, format)
}
