//! Catalog services - stateless operations over product collections

mod facet_calculator;
mod filter_query_adapter;
mod filter_summary;
mod paginator;
mod product_filter;
mod product_sorter;
mod query_codec;

pub use facet_calculator::{FacetCalculator, FacetField, DEFAULT_HISTOGRAM_BUCKETS};
pub use filter_query_adapter::FilterQueryAdapter;
pub use filter_summary::{AppliedFilter, FilterSummary};
pub use paginator::{Paginator, DEFAULT_PAGE_SIZE};
pub use product_filter::{create_search_filter, ProductFilter, SearchFilter};
pub use product_sorter::{locale_compare, ProductSorter};
pub use query_codec::QueryCodec;
