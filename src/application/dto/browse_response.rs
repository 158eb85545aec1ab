use crate::catalog::domain::{
    BrowseFilters, HistogramBucket, Page, PriceRange, Product, VendorFacet,
};
use crate::catalog::services::AppliedFilter;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Provenance of a generated browse report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub serial_number: String,
}

impl ReportMetadata {
    /// Metadata stamped with the current time and a fresh UUID serial
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            tool_name: tool_name.to_string(),
            tool_version: tool_version.to_string(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }

    /// Metadata for this crate, using the compile-time package version
    pub fn generate_default() -> Self {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// Facets computed over the full catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    pub price_histogram: Vec<HistogramBucket>,
    pub vendors: Vec<VendorFacet>,
    pub tags: Vec<String>,
    pub price_range: PriceRange,
}

/// BrowseResponse - result of one browse run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub metadata: ReportMetadata,
    /// Normalized filter specification that was applied
    pub filters: BrowseFilters,
    /// Canonical query string for `filters`
    pub query_string: String,
    pub sort: String,
    pub active_filter_count: usize,
    pub applied_filters: Vec<AppliedFilter>,
    /// Number of products in the catalog before filtering
    pub catalog_size: usize,
    pub page: Page<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<CatalogFacets>,
}
