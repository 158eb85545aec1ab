use catalog_query::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock CatalogReader serving a fixed product list
///
/// Records every path it was asked to read.
#[derive(Default, Clone)]
pub struct MockCatalogReader {
    products: Vec<Product>,
    error: Option<String>,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockCatalogReader {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Reader whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn read_count(&self) -> usize {
        self.requested_paths.lock().unwrap().len()
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, path: &Path) -> Result<Vec<Product>> {
        self.requested_paths.lock().unwrap().push(path.to_path_buf());
        match &self.error {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(self.products.clone()),
        }
    }
}
