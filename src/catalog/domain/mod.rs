pub mod browse_filters;
pub mod condition;
pub mod facets;
pub mod filter_query;
pub mod page;
pub mod price_range;
pub mod product;
pub mod sort_option;

pub use browse_filters::BrowseFilters;
pub use condition::{find_condition, ConditionGrade, CONDITIONS};
pub use facets::{HistogramBucket, VendorFacet};
pub use filter_query::{FilterQuery, FilterValue};
pub use page::Page;
pub use price_range::{PriceRange, PriceRangeValidation, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
pub use product::Product;
pub use sort_option::{SortDirection, SortField, SortOption, SortSpec};
