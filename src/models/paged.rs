//! Paged result wrapper

use serde::Serialize;

/// One page of mapped results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedData<T> {
    pub items: Vec<T>,

    /// Zero-based page index
    pub current_page: u32,

    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub is_last_page: bool,
}
