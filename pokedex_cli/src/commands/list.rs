use anyhow::Result;
use clap::Args;
use pokedex_lib::PokedexService;

use super::PageArgs;
use crate::output::{print_page, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &ListArgs, service: &PokedexService, format: &OutputFormat) -> Result<()> {
    let page = service.list_page(args.paging.request()).await?;

    eprintln!(
        "Page {}/{} ({} total Pokemon)",
        page.page, page.total_pages, page.total_count
    );

    print_page(&page, format)
}
