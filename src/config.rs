//! Configuration file support for catalog-query.
//!
//! Provides YAML-based configuration through `catalog-query.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::catalog::domain::{SortField, SortOption};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "catalog-query.config.yml";

/// Largest accepted value for `page_size` and `histogram_buckets`
pub const MAX_PAGE_SIZE: usize = 100;
pub const MAX_HISTOGRAM_BUCKETS: usize = 100;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page_size: Option<usize>,
    pub histogram_buckets: Option<usize>,
    pub facets: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is an empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and that `format` is json or markdown.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    match (config.sort.as_deref(), config.order.as_deref()) {
        (Some(sort), None) => {
            if let Err(e) = sort.parse::<SortOption>() {
                bail!("Invalid config: sort: {}", e);
            }
        }
        (Some(sort), Some(_)) => {
            if let Err(e) = sort.parse::<SortField>() {
                bail!(
                    "Invalid config: {}\n\n💡 Hint: When 'order' is set, 'sort' must name a field (price or name).",
                    e
                );
            }
        }
        (None, Some(_)) => bail!(
            "Invalid config: 'order' requires 'sort'.\n\n💡 Hint: Add e.g. `sort: price` next to `order`."
        ),
        (None, None) => {}
    }

    validate_range("page_size", config.page_size, MAX_PAGE_SIZE)?;
    validate_range("histogram_buckets", config.histogram_buckets, MAX_HISTOGRAM_BUCKETS)?;

    Ok(())
}

fn validate_range(field: &str, value: Option<usize>, max: usize) -> Result<()> {
    match value {
        Some(v) if v == 0 || v > max => bail!(
            "Invalid config: {} must be between 1 and {} (got {}).",
            field,
            max,
            v
        ),
        _ => Ok(()),
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write(
            &dir,
            r#"
format: markdown
sort: price-desc
page_size: 12
histogram_buckets: 5
facets: true
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Markdown));
        assert_eq!(config.sort.as_deref(), Some("price-desc"));
        assert!(config.order.is_none());
        assert_eq!(config.page_size, Some(12));
        assert_eq!(config.histogram_buckets, Some(5));
        assert_eq!(config.facets, Some(true));
    }

    #[test]
    fn test_field_sort_with_order() {
        let dir = TempDir::new().unwrap();
        let config_path = write(&dir, "sort: name\norder: asc\n");
        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.order.as_deref(), Some("asc"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: md\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from_path(&write(&dir, "\n")).unwrap();
        assert!(config.format.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = format!(
            "{}",
            load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err()
        );
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let err = format!(
            "{}",
            load_config_from_path(&write(&dir, "invalid: yaml: [[[broken")).unwrap_err()
        );
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&write(&dir, "format: csv\n"));
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_sort_option() {
        let dir = TempDir::new().unwrap();
        let err = format!(
            "{}",
            load_config_from_path(&write(&dir, "sort: cheapest\n")).unwrap_err()
        );
        assert!(err.contains("Invalid sort option: cheapest"));
    }

    #[test]
    fn test_order_requires_field_sort() {
        let dir = TempDir::new().unwrap();
        let err = format!(
            "{}",
            load_config_from_path(&write(&dir, "sort: newest\norder: asc\n")).unwrap_err()
        );
        assert!(err.contains("must name a field"));

        let err = format!(
            "{}",
            load_config_from_path(&write(&dir, "order: asc\n")).unwrap_err()
        );
        assert!(err.contains("'order' requires 'sort'"));
    }

    #[test]
    fn test_page_size_bounds() {
        let dir = TempDir::new().unwrap();
        let err = format!(
            "{}",
            load_config_from_path(&write(&dir, "page_size: 0\n")).unwrap_err()
        );
        assert!(err.contains("page_size must be between 1 and 100"));

        let err = format!(
            "{}",
            load_config_from_path(&write(&dir, "histogram_buckets: 101\n")).unwrap_err()
        );
        assert!(err.contains("histogram_buckets must be between 1 and 100"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from_path(&write(
            &dir,
            "format: json\nunknown_field: true\nanother_unknown: value\n",
        ))
        .unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.sort.is_none());
        assert!(config.page_size.is_none());
        assert!(config.facets.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
