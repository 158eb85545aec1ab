mod category_slug;
mod price_range_policy;

pub use category_slug::CategorySlugPolicy;
pub use price_range_policy::PriceRangePolicy;
