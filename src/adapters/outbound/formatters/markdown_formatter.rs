use crate::application::dto::{BrowseResponse, CatalogFacets};
use crate::catalog::domain::{Page, Product};
use crate::catalog::services::AppliedFilter;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// Markdown table header for the product listing
const TABLE_HEADER: &str = "| ID | Name | Price | Stock | Category | Vendor | Condition | Tags |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----|------|------:|------:|----------|--------|-----------|------|\n";

/// MarkdownFormatter adapter for a human-readable browse report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_price(price: f64) -> String {
        format!("{:.2}", price)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, response: &BrowseResponse) {
        output.push_str("# Catalog Browse Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            response.metadata.tool_name, response.metadata.tool_version, response.metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, response: &BrowseResponse) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Catalog size: {}\n", response.catalog_size));
        output.push_str(&format!("- Matching products: {}\n", response.page.total));
        output.push_str(&format!(
            "- Page: {} of {} ({} per page)\n",
            response.page.page,
            response.page.total_pages().max(1),
            response.page.page_size
        ));
        output.push_str(&format!("- Sort: {}\n", response.sort));
        if !response.query_string.is_empty() {
            output.push_str(&format!("- Query: `?{}`\n", response.query_string));
        }
        output.push('\n');
    }

    fn render_applied_filters(&self, output: &mut String, applied: &[AppliedFilter]) {
        output.push_str(&format!("## Applied Filters ({})\n\n", applied.len()));

        if applied.is_empty() {
            output.push_str("No filters applied.\n\n");
            return;
        }

        for filter in applied {
            output.push_str(&format!("- **{}**: {}\n", filter.filter_type, filter.label));
        }
        output.push('\n');
    }

    fn render_products(&self, output: &mut String, page: &Page<Product>) {
        output.push_str("## Products\n\n");

        if page.data.is_empty() {
            output.push_str("No products match the current filters.\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for product in &page.data {
            let vendor = product.vendor_name().or(product.vendor_id()).unwrap_or("");
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(product.id()),
                Self::escape_markdown_table_cell(product.name()),
                Self::format_price(product.price()),
                product.stock(),
                Self::escape_markdown_table_cell(product.category()),
                Self::escape_markdown_table_cell(vendor),
                Self::escape_markdown_table_cell(product.condition().unwrap_or("")),
                Self::escape_markdown_table_cell(&product.tags().join(", ")),
            ));
        }
        output.push('\n');
    }

    fn render_facets(&self, output: &mut String, facets: &CatalogFacets) {
        output.push_str("## Facets\n\n");
        output.push_str(&format!(
            "Price range: {} - {}\n\n",
            Self::format_price(facets.price_range.min),
            Self::format_price(facets.price_range.max)
        ));

        output.push_str("### Price Histogram\n\n| Range | Count |\n|-------|------:|\n");
        for bucket in &facets.price_histogram {
            output.push_str(&format!("| {} | {} |\n", bucket.range, bucket.count));
        }

        output.push_str("\n### Vendors\n\n| Vendor | ID | Products |\n|--------|----|---------:|\n");
        for vendor in &facets.vendors {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&vendor.name),
                Self::escape_markdown_table_cell(&vendor.id),
                vendor.count
            ));
        }

        output.push_str("\n### Tags\n\n");
        if facets.tags.is_empty() {
            output.push_str("No tags.\n");
        } else {
            output.push_str(&facets.tags.join(", "));
            output.push('\n');
        }
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, response: &BrowseResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, response);
        self.render_summary(&mut output, response);
        self.render_applied_filters(&mut output, &response.applied_filters);
        self.render_products(&mut output, &response.page);

        if let Some(facets) = &response.facets {
            self.render_facets(&mut output, facets);
        }

        Ok(output)
    }
}
