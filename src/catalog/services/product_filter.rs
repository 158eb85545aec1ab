use crate::catalog::domain::{BrowseFilters, FilterQuery, PriceRange, Product};
use crate::catalog::policies::CategorySlugPolicy;
use crate::catalog::services::FilterQueryAdapter;
use std::collections::BTreeSet;

/// Case-insensitive free-text predicate over product fields
///
/// Matches name, description, category name, vendor display name, or any
/// tag. An empty term matches every product.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.is_active() {
            return true;
        }

        let contains = |field: &str| field.to_lowercase().contains(&self.term);

        contains(product.name())
            || contains(product.description())
            || contains(product.category())
            || product.vendor_name().is_some_and(contains)
            || product.tags().iter().any(|tag| contains(tag))
    }
}

/// Builds a standalone search predicate
pub fn create_search_filter(term: &str) -> impl Fn(&Product) -> bool {
    let filter = SearchFilter::new(term);
    move |product| filter.matches(product)
}

/// ProductFilter - narrows a product collection with a filter specification
///
/// A product survives only if it satisfies every active predicate. The
/// relative order of the input is preserved and the input is never mutated.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    search: SearchFilter,
    categories: BTreeSet<String>,
    conditions: BTreeSet<String>,
    price_range: PriceRange,
    vendors: BTreeSet<String>,
    in_stock: bool,
    tags: BTreeSet<String>,
}

impl ProductFilter {
    pub fn new(filters: &BrowseFilters) -> Self {
        Self {
            search: SearchFilter::new(&filters.search),
            categories: filters.categories.clone(),
            conditions: filters.conditions.clone(),
            price_range: filters.price_range,
            vendors: filters.vendors.clone(),
            in_stock: filters.in_stock,
            tags: filters.tags.clone(),
        }
    }

    /// Filters products with a structured filter specification
    pub fn filter_products(products: &[Product], filters: &BrowseFilters) -> Vec<Product> {
        Self::new(filters).apply(products)
    }

    /// Filters products with a loosely typed query map
    ///
    /// The map goes through the same adapter as bookmarked query strings,
    /// so both entry points share one set of predicates.
    pub fn apply_filters(products: &[Product], query: &FilterQuery) -> Vec<Product> {
        Self::filter_products(products, &FilterQueryAdapter::to_filters(query))
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.search.matches(product)
            && self.matches_category(product)
            && self.matches_condition(product)
            && self.price_range.contains(product.price())
            && self.matches_vendor(product)
            && (!self.in_stock || product.is_in_stock())
            && self.matches_tags(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty()
            || CategorySlugPolicy::product_matches(product, |slug| self.categories.contains(slug))
    }

    fn matches_condition(&self, product: &Product) -> bool {
        self.conditions.is_empty()
            || product
                .condition()
                .is_some_and(|condition| self.conditions.contains(condition))
    }

    fn matches_vendor(&self, product: &Product) -> bool {
        self.vendors.is_empty()
            || product
                .vendor_id()
                .is_some_and(|vendor_id| self.vendors.contains(vendor_id))
    }

    fn matches_tags(&self, product: &Product) -> bool {
        self.tags.is_empty() || product.tags().iter().any(|tag| self.tags.contains(tag))
    }
}
