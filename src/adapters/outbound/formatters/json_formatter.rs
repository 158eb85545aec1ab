use crate::application::dto::BrowseResponse;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter - pretty-printed camelCase JSON report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, response: &BrowseResponse) -> Result<String> {
        serde_json::to_string_pretty(response).context("Failed to serialize browse report to JSON")
    }
}
