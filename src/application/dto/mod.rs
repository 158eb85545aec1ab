/// Data Transfer Objects for application layer
///
/// DTOs carry a browse run's inputs and results between the CLI, the use
/// case and the formatters, keeping the catalog engine free of I/O concerns.
mod browse_request;
mod browse_response;
mod output_format;

pub use browse_request::BrowseRequest;
pub use browse_response::{BrowseResponse, CatalogFacets, ReportMetadata};
pub use output_format::OutputFormat;
