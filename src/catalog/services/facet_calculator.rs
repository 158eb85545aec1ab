use crate::catalog::domain::{HistogramBucket, PriceRange, Product, VendorFacet};
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

/// Default number of histogram buckets
pub const DEFAULT_HISTOGRAM_BUCKETS: usize = 10;

/// Product fields that can be enumerated with [`FacetCalculator::unique_values`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField {
    Category,
    CategorySlug,
    Vendor,
    VendorId,
    Condition,
    Tags,
}

impl FromStr for FacetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FacetField::Category),
            "categorySlug" => Ok(FacetField::CategorySlug),
            "vendor" => Ok(FacetField::Vendor),
            "vendorId" => Ok(FacetField::VendorId),
            "condition" => Ok(FacetField::Condition),
            "tags" => Ok(FacetField::Tags),
            _ => Err(format!("Unknown facet field: {}", s)),
        }
    }
}

/// FacetCalculator service for aggregate views over a product collection
///
/// Facets drive UI affordances (price slider, vendor and tag pickers);
/// they never filter anything themselves.
pub struct FacetCalculator;

impl FacetCalculator {
    /// Counts products per equal-width price bucket
    ///
    /// Buckets are half-open `[lo, hi)` except the last one, which is
    /// closed so the most expensive product is always counted. Counts
    /// therefore always sum to `products.len()`. When every price is equal
    /// all products land in the last bucket.
    pub fn price_histogram(products: &[Product], buckets: usize) -> Vec<HistogramBucket> {
        let Some(range) = Self::observed_range(products) else {
            return Vec::new();
        };
        if buckets == 0 {
            return Vec::new();
        }

        let width = (range.max - range.min) / buckets as f64;

        (0..buckets)
            .map(|i| {
                let range_min = range.min + i as f64 * width;
                let range_max = range.min + (i + 1) as f64 * width;
                let is_last = i + 1 == buckets;

                let count = products
                    .iter()
                    .map(Product::price)
                    .filter(|&price| price >= range_min && (is_last || price < range_max))
                    .count();

                HistogramBucket {
                    range: format!("{}-{}", range_min.round(), range_max.round()),
                    count,
                    range_min,
                    range_max,
                }
            })
            .collect()
    }

    /// Vendors with their product counts, most products first
    ///
    /// Products without a vendor id are skipped. Ties keep first-seen order.
    /// The display name comes from the first product seen for the vendor,
    /// falling back to the vendor id.
    pub fn unique_vendors(products: &[Product]) -> Vec<VendorFacet> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut vendors: Vec<VendorFacet> = Vec::new();

        for product in products {
            let Some(vendor_id) = product.vendor_id() else {
                continue;
            };

            match index.get(vendor_id) {
                Some(&position) => vendors[position].count += 1,
                None => {
                    index.insert(vendor_id, vendors.len());
                    vendors.push(VendorFacet {
                        id: vendor_id.to_string(),
                        name: product
                            .vendor_name()
                            .filter(|name| !name.is_empty())
                            .unwrap_or(vendor_id)
                            .to_string(),
                        count: 1,
                    });
                }
            }
        }

        vendors.sort_by(|a, b| b.count.cmp(&a.count));
        vendors
    }

    /// Distinct tags in lexicographic order
    pub fn unique_tags(products: &[Product]) -> Vec<String> {
        products
            .iter()
            .flat_map(|product| product.tags().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Lowest and highest price, or `{0, 0}` for an empty collection
    pub fn price_range(products: &[Product]) -> PriceRange {
        Self::observed_range(products).unwrap_or(PriceRange::new(0.0, 0.0))
    }

    /// Distinct non-empty values of a product field
    pub fn unique_values(products: &[Product], field: FacetField) -> BTreeSet<String> {
        let mut values = BTreeSet::new();

        for product in products {
            match field {
                FacetField::Tags => values.extend(product.tags().iter().cloned()),
                _ => {
                    let value = match field {
                        FacetField::Category => Some(product.category()),
                        FacetField::CategorySlug => product.category_slug(),
                        FacetField::Vendor => product.vendor_name(),
                        FacetField::VendorId => product.vendor_id(),
                        FacetField::Condition => product.condition(),
                        FacetField::Tags => None,
                    };
                    if let Some(value) = value.filter(|v| !v.is_empty()) {
                        values.insert(value.to_string());
                    }
                }
            }
        }

        values
    }

    /// Same as [`Self::unique_values`] with a wire field name; unknown
    /// fields yield an empty set
    pub fn unique_values_by_name(products: &[Product], field: &str) -> BTreeSet<String> {
        field
            .parse::<FacetField>()
            .map(|field| Self::unique_values(products, field))
            .unwrap_or_default()
    }

    fn observed_range(products: &[Product]) -> Option<PriceRange> {
        let mut prices = products.iter().map(Product::price);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(PriceRange::new(min, max))
    }
}
