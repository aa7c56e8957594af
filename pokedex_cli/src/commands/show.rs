use anyhow::{bail, Result};
use clap::Args;
use pokedex_lib::PokedexService;

use crate::output::{print_detail, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Pokemon name (case-insensitive) or National Dex number
    pub name: String,
}

pub async fn run(args: &ShowArgs, service: &PokedexService, format: &OutputFormat) -> Result<()> {
    let record = match service.format_detail(&args.name).await? {
        Some(record) => record,
        None => bail!("Pokemon '{}' not found", args.name.trim()),
    };
    print_detail(&record, format)
}
