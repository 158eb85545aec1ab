use crate::application::dto::BrowseResponse;
use crate::shared::Result;

/// CatalogFormatter port for rendering browse results
///
/// Implemented once per output format (JSON, Markdown).
pub trait CatalogFormatter {
    /// Renders a browse response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &BrowseResponse) -> Result<String>;
}
