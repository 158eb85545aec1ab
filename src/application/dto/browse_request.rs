use crate::catalog::domain::{FilterQuery, SortSpec};
use crate::catalog::services::{DEFAULT_HISTOGRAM_BUCKETS, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;

/// BrowseRequest - Internal request DTO for the browse use case
#[derive(Debug, Clone)]
pub struct BrowseRequest {
    /// Path to the catalog snapshot
    pub catalog_path: PathBuf,
    /// Filter fields in their wire form
    pub query: FilterQuery,
    pub sort: SortSpec,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    /// Whether to compute facets over the full catalog
    pub include_facets: bool,
    pub histogram_buckets: usize,
}

impl BrowseRequest {
    /// Request for the first page of an unfiltered catalog, newest first
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            query: FilterQuery::new(),
            sort: SortSpec::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            include_facets: false,
            histogram_buckets: DEFAULT_HISTOGRAM_BUCKETS,
        }
    }

    pub fn with_query(mut self, query: FilterQuery) -> Self {
        self.query = query;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn with_facets(mut self, histogram_buckets: usize) -> Self {
        self.include_facets = true;
        self.histogram_buckets = histogram_buckets;
        self
    }
}
