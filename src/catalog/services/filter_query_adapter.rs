use crate::catalog::domain::{BrowseFilters, FilterQuery, FilterValue, PriceRange};
use crate::catalog::policies::PriceRangePolicy;
use std::collections::BTreeSet;

/// Query keys read into each set-valued filter, singular form first
const CATEGORY_KEYS: [&str; 2] = ["category", "categories"];
const CONDITION_KEYS: [&str; 2] = ["condition", "conditions"];
const VENDOR_KEYS: [&str; 2] = ["vendor", "vendors"];
const TAG_KEYS: [&str; 2] = ["tag", "tags"];

/// FilterQueryAdapter - converts between the query-string map and the
/// structured filter specification
///
/// This is the only place that knows the wire field names. Set-valued
/// fields accept both repeated keys and comma-joined values, which is what
/// makes structured round-trips exact even though the raw codec is not.
pub struct FilterQueryAdapter;

impl FilterQueryAdapter {
    /// Reads a filter specification from a query map
    ///
    /// Unknown keys and unparseable numbers are ignored. Without a valid
    /// `minPrice`/`maxPrice` the price range is unbounded.
    pub fn to_filters(query: &FilterQuery) -> BrowseFilters {
        let min_price = query.first("minPrice").and_then(parse_number);
        let max_price = query.first("maxPrice").and_then(parse_number);
        let validation = PriceRangePolicy::validate_price_range(min_price, max_price);

        BrowseFilters {
            search: query.first("search").unwrap_or_default().to_string(),
            categories: collect_set(query, &CATEGORY_KEYS),
            conditions: collect_set(query, &CONDITION_KEYS),
            price_range: if validation.valid {
                validation.range()
            } else {
                PriceRange::unbounded()
            },
            vendors: collect_set(query, &VENDOR_KEYS),
            in_stock: query.first("inStock").is_some_and(parse_flag),
            tags: collect_set(query, &TAG_KEYS),
        }
    }

    /// Writes the active fields of a filter specification to a query map
    pub fn to_query(filters: &BrowseFilters) -> FilterQuery {
        let mut query = FilterQuery::new();

        if !filters.search.is_empty() {
            query.insert("search", filters.search.as_str());
        }
        insert_set(&mut query, "categories", &filters.categories);
        insert_set(&mut query, "conditions", &filters.conditions);
        insert_set(&mut query, "vendors", &filters.vendors);
        insert_set(&mut query, "tags", &filters.tags);

        if filters.in_stock {
            query.insert("inStock", true);
        }
        if filters.price_range.min > 0.0 {
            query.insert("minPrice", filters.price_range.min);
        }
        if !filters.price_range.is_unbounded_above() {
            query.insert("maxPrice", filters.price_range.max);
        }

        query
    }
}

fn collect_set(query: &FilterQuery, keys: &[&str]) -> BTreeSet<String> {
    keys.iter().flat_map(|key| query.values(key)).collect()
}

fn insert_set(query: &mut FilterQuery, key: &str, values: &BTreeSet<String>) {
    if !values.is_empty() {
        query.insert(key, FilterValue::Multiple(values.iter().cloned().collect()));
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
