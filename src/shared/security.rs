use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest catalog snapshot accepted from disk (100 MB)
pub const MAX_CATALOG_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects paths that are symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or its metadata cannot be read
pub fn ensure_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| CatalogError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata before {}: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Symbolic links are not allowed for {} operations", operation),
            hint: "Pass the path of the real file instead of a link to it".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that a catalog path is a regular file within the size limit and
/// returns its size in bytes.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link or not a regular file
/// - The file is larger than `max_size`
pub fn ensure_readable_catalog(path: &Path, max_size: u64) -> Result<u64> {
    ensure_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| CatalogError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(CatalogError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Catalog is too large ({} bytes). Maximum allowed size is {} bytes",
                metadata.len(),
                max_size
            ),
            hint: "Export a smaller catalog snapshot or split it by vendor".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(ensure_not_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_ensure_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/catalog.json");
        assert!(ensure_not_symlink(&path, "read").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_not_symlink_rejects_link() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("catalog.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "[]").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = ensure_not_symlink(&link, "read").unwrap_err();
        assert!(err.to_string().contains("Symbolic links are not allowed"));
    }

    #[test]
    fn test_ensure_readable_catalog_returns_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "[]").unwrap();

        assert_eq!(ensure_readable_catalog(&file_path, MAX_CATALOG_SIZE).unwrap(), 2);
    }

    #[test]
    fn test_ensure_readable_catalog_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = ensure_readable_catalog(temp_dir.path(), MAX_CATALOG_SIZE).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_ensure_readable_catalog_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "[1, 2, 3]").unwrap();

        let err = ensure_readable_catalog(&file_path, 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
