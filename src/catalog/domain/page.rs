use serde::Serialize;

/// One page of an ordered result set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Number of items across all pages
    pub total: usize,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1))
    }
}
