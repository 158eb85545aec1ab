/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_sort_and_page_size() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "sort: price-asc\npage_size: 2\n",
        );

        let output = cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .output()
            .unwrap();

        let json = stdout_json(&output);
        assert_eq!(json["page"]["pageSize"], 2);
        assert_eq!(json["page"]["data"][0]["id"], "p-004");
        assert_eq!(json["page"]["data"][1]["id"], "p-006");
    }

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("catalog-query.config.yml"), "format: md\n");

        cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .assert()
            .success()
            .stdout(predicate::str::contains("# Catalog Browse Report"));
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .output()
            .unwrap();

        let json = stdout_json(&output);
        assert_eq!(json["page"]["pageSize"], 24);
        assert_eq!(json["sort"], "newest");
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_enables_facets() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("browse.yml");
        write_config(&config_path, "facets: true\nhistogram_buckets: 3\n");

        let output = cargo_bin_cmd!("catalog-query")
            .arg(fixture_catalog())
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        let json = stdout_json(&output);
        assert_eq!(
            json["facets"]["priceHistogram"].as_array().unwrap().len(),
            3
        );
    }

    #[test]
    fn test_explicit_config_field_sort() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("browse.yml");
        write_config(&config_path, "sort: name\norder: asc\n");

        let output = cargo_bin_cmd!("catalog-query")
            .arg(fixture_catalog())
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        let json = stdout_json(&output);
        // "Amazing Spider-Man #300" sorts first
        assert_eq!(json["page"]["data"][0]["id"], "p-002");
    }

    #[test]
    fn test_explicit_config_missing_file() {
        cargo_bin_cmd!("catalog-query")
            .arg(fixture_catalog())
            .args(["--config", "/nonexistent/browse.yml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "format: markdown\nsort: price-asc\npage_size: 2\n",
        );

        let output = cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .args(["--format", "json", "--sort", "price-desc", "--limit", "1"])
            .output()
            .unwrap();

        let json = stdout_json(&output);
        assert_eq!(json["page"]["pageSize"], 1);
        assert_eq!(json["page"]["data"][0]["id"], "p-005");
    }

    #[test]
    fn test_facets_flag_with_config_buckets() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "histogram_buckets: 4\n",
        );

        let output = cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .arg("--facets")
            .output()
            .unwrap();

        let json = stdout_json(&output);
        assert_eq!(
            json["facets"]["priceHistogram"].as_array().unwrap().len(),
            4
        );
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "invalid: yaml: [[[broken",
        );

        cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_sort_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "sort: cheapest\n",
        );

        cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid sort option: cheapest"));
    }

    #[test]
    fn test_page_size_out_of_range() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "page_size: 500\n",
        );

        cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("page_size must be between 1 and 100"));
    }

    #[test]
    fn test_unknown_fields_warn_but_succeed() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("catalog-query.config.yml"),
            "format: json\nmax_results: 10\n",
        );

        cargo_bin_cmd!("catalog-query")
            .current_dir(dir.path())
            .arg(fixture_catalog())
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'max_results' will be ignored",
            ));
    }
}
