/// Pagination support for catalog listings
///
/// The catalog serves fixed-size pages without a cursor, so whether another
/// page exists is inferred from the size of the one just received.
use serde::{Deserialize, Serialize};

/// Number of items the catalog returns on a full page
pub const DEFAULT_PAGE_SIZE: usize = 250;

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub current_page: u32,
}

impl<T> PaginatedResponse<T> {
    /// Wrap one page of items. A page holding exactly `page_size` items is
    /// assumed to have a successor.
    pub fn from_page(data: Vec<T>, page: u32, page_size: usize) -> Self {
        let has_next_page = data.len() == page_size;
        Self {
            data,
            has_next_page,
            has_previous_page: page > 0,
            current_page: page,
        }
    }

    /// Page to request next when scrolling, if any
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
