use crate::catalog::domain::Product;
use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for loading a product catalog snapshot
///
/// The engine works on in-memory products; this port hides where the
/// snapshot comes from.
pub trait CatalogReader {
    /// Reads every product from the catalog at `path`, in catalog order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog does not exist or cannot be read
    /// - The content is not a valid product list
    /// - A product record violates its invariants
    fn read_catalog(&self, path: &Path) -> Result<Vec<Product>>;
}
