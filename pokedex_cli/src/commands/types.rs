use anyhow::{bail, Result};
use clap::Args;
use pokedex_lib::PokedexService;

use super::PageArgs;
use crate::output::{print_page, print_types, OutputFormat};

#[derive(Args)]
pub struct TypeArgs {
    /// Type name, e.g. fire, water, dragon
    pub name: String,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run_list(service: &PokedexService, format: &OutputFormat) -> Result<()> {
    let types = service.list_types().await?;
    eprintln!("{} types", types.len());
    print_types(&types, format)
}

pub async fn run_members(
    args: &TypeArgs,
    service: &PokedexService,
    format: &OutputFormat,
) -> Result<()> {
    let page = match service.list_by_type(&args.name, args.paging.request()).await? {
        Some(page) => page,
        None => bail!("Type '{}' not found", args.name.trim()),
    };

    eprintln!(
        "Page {}/{} ({} total {} Pokemon)",
        page.page,
        page.total_pages,
        page.total_count,
        args.name.trim().to_lowercase()
    );

    print_page(&page, format)
}
