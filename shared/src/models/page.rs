//! Collection responses and pagination parameters

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Collection response
///
/// `count` is the number of entries in `results`, not a total across pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(results: Vec<T>) -> Self {
        Self::new(results)
    }
}

/// Page query parameters (`pageSize`, `pageNumber`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_size: Option<u32>,
    /// Zero-based page index
    pub page_number: Option<u32>,
}

impl PageRequest {
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size: Some(page_size),
            page_number: Some(page_number),
        }
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> i64 {
        i64::from(
            self.page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        )
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page_number.unwrap_or(0)) * self.limit()
    }
}
