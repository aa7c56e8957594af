//! CLI subcommand implementations.

pub mod list;
pub mod search;
pub mod serve;
pub mod show;
pub mod types;

use clap::Args;
use pokedex_lib::PageRequest;

/// Paging flags shared by the list commands. Values are taken verbatim and
/// coerced, so `--page abc` silently means page 1.
#[derive(Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Results per page (max 100)
    #[arg(long, allow_hyphen_values = true)]
    pub page_size: Option<String>,
}

impl PageArgs {
    pub fn request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.page_size.as_deref())
    }
}
