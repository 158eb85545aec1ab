//! catalog-query - catalog query engine for marketplace storefronts
//!
//! Filters, sorts, paginates and facets in-memory product collections, and
//! encodes filter specifications as shareable query strings. The engine is
//! pure; reading catalogs and writing reports happens in adapters behind
//! ports (hexagonal architecture).
//!
//! # Architecture
//!
//! - **Catalog** (`catalog`): domain types, policies and the query services
//! - **Application Layer** (`application`): the browse use case, DTOs, factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types, exit codes, file safety checks
//!
//! # Example
//!
//! ```
//! use catalog_query::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let products = vec![
//!     Product::new("1", "Booster Pack", 4.99)?.with_stock(10),
//!     Product::new("2", "Graded Slab", 350.0)?,
//! ];
//!
//! let query = QueryCodec::parse_filter_query("?inStock=true&maxPrice=100");
//! let filters = FilterQueryAdapter::to_filters(&query);
//! let matched = ProductFilter::filter_products(&products, &filters);
//! let sorted = ProductSorter::sort_products(&matched, &SortOption::PriceAsc.into());
//!
//! assert_eq!(sorted.len(), 1);
//! assert_eq!(FilterSummary::active_filter_count(&filters), 2);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{BrowseRequest, BrowseResponse, OutputFormat};
    pub use crate::application::use_cases::BrowseCatalogUseCase;
    pub use crate::catalog::domain::{
        BrowseFilters, FilterQuery, FilterValue, Page, PriceRange, Product, SortOption, SortSpec,
    };
    pub use crate::catalog::policies::{CategorySlugPolicy, PriceRangePolicy};
    pub use crate::catalog::services::{
        create_search_filter, FacetCalculator, FilterQueryAdapter, FilterSummary, Paginator,
        ProductFilter, ProductSorter, QueryCodec,
    };
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
