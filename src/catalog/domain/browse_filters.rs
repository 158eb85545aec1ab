use super::{PriceRange, Product};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structured filter specification for a product listing
///
/// Set-valued fields are empty by default, meaning "no restriction".
/// The default price range is the canonical `[0, 10000]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseFilters {
    pub search: String,
    pub categories: BTreeSet<String>,
    pub conditions: BTreeSet<String>,
    pub price_range: PriceRange,
    pub vendors: BTreeSet<String>,
    pub in_stock: bool,
    pub tags: BTreeSet<String>,
}

impl BrowseFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default filters whose price range spans the prices observed in
    /// `products`, falling back to the canonical range for an empty slice
    pub fn with_observed_prices(products: &[Product]) -> Self {
        let mut prices = products.iter().map(Product::price);
        let price_range = match prices.next() {
            Some(first) => {
                let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
                PriceRange::new(min, max)
            }
            None => PriceRange::default(),
        };

        Self {
            price_range,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.categories.insert(slug.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions.insert(condition.into());
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_vendor(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendors.insert(vendor_id.into());
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }
}
