use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoomError};

/// Largest page size the listing endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 300;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// A validated page request. Can only be built with a page size in
/// `1..=300` and a page number of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    page_size: u32,
    page_number: u32,
}

impl PaginationRequest {
    pub fn new(page_size: u32, page_number: u32) -> Result<Self> {
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ZoomError::InvalidArgument(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
            )));
        }
        if page_number < 1 {
            return Err(ZoomError::InvalidArgument(
                "page number must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            page_size,
            page_number,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Request for the page after this one, same size.
    pub fn next(&self) -> Self {
        Self {
            page_size: self.page_size,
            page_number: self.page_number.saturating_add(1),
        }
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Whether another page should be requested. An empty page never has a
    /// successor, whatever its metadata claims.
    pub fn has_next_page(&self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if self.next_page_token.as_deref().is_some_and(|t| !t.is_empty()) {
            return true;
        }
        self.page_number < self.total_pages
    }
}
