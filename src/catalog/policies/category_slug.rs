use crate::catalog::domain::Product;

/// CategorySlugPolicy decides which slugs identify a product's category
///
/// A product matches a category filter through its precomputed slug or,
/// failing that, through a slug derived from the category name.
pub struct CategorySlugPolicy;

impl CategorySlugPolicy {
    /// Derives a slug from a category name
    ///
    /// Lower-cases the name, drops a standalone `&` between words, and joins
    /// the remaining words with single hyphens:
    /// `"Trading Cards & Games"` becomes `"trading-cards-games"`.
    pub fn derive_slug(category_name: &str) -> String {
        category_name
            .to_lowercase()
            .split_whitespace()
            .filter(|word| *word != "&")
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Returns true when the product's category is selected by `matches`
    pub fn product_matches<F>(product: &Product, mut matches: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        if product.category_slug().is_some_and(&mut matches) {
            return true;
        }

        !product.category().is_empty() && matches(&Self::derive_slug(product.category()))
    }
}
