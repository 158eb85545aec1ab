use crate::catalog::domain::Product;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::CatalogError;
use crate::shared::security::{ensure_readable_catalog, MAX_CATALOG_SIZE};
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Top-level keys that may hold the product array in a wrapped catalog
const PRODUCT_ARRAY_KEYS: [&str; 2] = ["products", "data"];

/// FileSystemReader adapter for reading catalog snapshots from disk
///
/// Accepts either a bare JSON array of products or an API-style envelope
/// object with a `products` (or `data`) array.
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_CATALOG_SIZE,
        }
    }

    /// Reader with a custom size limit in bytes
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    fn parse_catalog(path: &Path, content: &str) -> Result<Vec<Product>> {
        let parse_error = |details: String| CatalogError::CatalogParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: Value =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let products = match document {
            Value::Array(_) => document,
            Value::Object(mut envelope) => PRODUCT_ARRAY_KEYS
                .iter()
                .find_map(|key| envelope.remove(*key))
                .ok_or_else(|| parse_error("No \"products\" array found".to_string()))?,
            _ => return Err(parse_error("Expected a JSON array or object".to_string()).into()),
        };

        serde_json::from_value(products).map_err(|e| parse_error(e.to_string()).into())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Vec<Product>> {
        if !path.exists() {
            return Err(CatalogError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Export a catalog snapshot as JSON and pass its path as the first argument"
                    .to_string(),
            }
            .into());
        }

        ensure_readable_catalog(path, self.max_size)?;

        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse_catalog(path, &content)
    }
}
