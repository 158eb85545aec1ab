use crate::catalog::domain::{Product, SortDirection, SortField, SortOption, SortSpec};
use std::cmp::Ordering;

/// ProductSorter service for ordering product listings
///
/// Always returns a newly allocated vector; the input slice is untouched.
/// Sorting is stable, so products with equal keys keep their input order.
pub struct ProductSorter;

impl ProductSorter {
    /// Sorts products according to a resolved sort specification
    pub fn sort_products(products: &[Product], spec: &SortSpec) -> Vec<Product> {
        let mut sorted = products.to_vec();

        match spec {
            SortSpec::Field { field, direction } => {
                let compare = match field {
                    SortField::Price => compare_price,
                    SortField::Name => compare_name,
                };
                sorted.sort_by(|a, b| match direction {
                    SortDirection::Asc => compare(a, b),
                    SortDirection::Desc => compare(b, a),
                });
            }
            SortSpec::Option(option) => Self::sort_by_option(&mut sorted, *option),
            SortSpec::Unsorted(_) => {}
        }

        sorted
    }

    /// Sorts using the raw call shape: a symbolic option, or a field name
    /// when `order` is supplied
    pub fn sort_products_by(products: &[Product], option: &str, order: Option<&str>) -> Vec<Product> {
        Self::sort_products(products, &SortSpec::parse(option, order))
    }

    fn sort_by_option(products: &mut [Product], option: SortOption) {
        match option {
            // The caller supplies products oldest first
            SortOption::Newest => products.reverse(),
            SortOption::PriceAsc | SortOption::LowToHigh => products.sort_by(compare_price),
            SortOption::PriceDesc | SortOption::HighToLow => {
                products.sort_by(|a, b| compare_price(b, a))
            }
            SortOption::NameAsc => products.sort_by(compare_name),
            SortOption::NameDesc => products.sort_by(|a, b| compare_name(b, a)),
            SortOption::ByRatings => products.sort_by(compare_rating_desc),
            SortOption::Oldest | SortOption::TopVendor | SortOption::ProductsCount => {}
        }
    }
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    a.price().total_cmp(&b.price())
}

fn compare_name(a: &Product, b: &Product) -> Ordering {
    locale_compare(a.name(), b.name())
}

/// Rated products first, highest rating first
fn compare_rating_desc(a: &Product, b: &Product) -> Ordering {
    match (a.rating(), b.rating()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Natural-language string ordering
///
/// Compares case-insensitively first; on a tie, lower-case sorts before
/// upper-case at the first differing position, then raw code points decide.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
