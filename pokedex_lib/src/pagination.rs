//! Page metadata shared by every list-shaped result.

use serde::{Deserialize, Serialize};

use crate::validation::{coerce_page, coerce_page_size, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::view::Summary;

/// A page of summaries plus the numbers needed to render a pager.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    pub items: Vec<Summary>,
    pub total_count: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl ListPage {
    /// Builds a page, deriving `total_pages`, `has_next` and `has_prev` from
    /// the total count rather than from `items.len()`.
    pub fn new(items: Vec<Summary>, total_count: u32, page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);
        Self {
            items,
            total_count,
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// A first page with no items.
    pub fn empty(page_size: u32) -> Self {
        Self::new(Vec::new(), 0, DEFAULT_PAGE, page_size)
    }
}

/// A validated page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Builds a request from raw, possibly malformed, caller input.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: coerce_page(page),
            page_size: coerce_page_size(page_size),
        }
    }

    /// Zero-based index of the first item on this page. Saturates instead of
    /// overflowing for absurd page numbers.
    pub fn offset(&self) -> u32 {
        let offset = u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size);
        u32::try_from(offset).unwrap_or(u32::MAX)
    }

    /// The slice of `items` this page covers. Empty when the page starts past
    /// the end.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.offset() as usize).min(items.len());
        let end = start.saturating_add(self.page_size as usize).min(items.len());
        &items[start..end]
    }
}
