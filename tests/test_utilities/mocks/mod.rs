/// Mock implementations for testing
mod mock_catalog_reader;
mod mock_progress_reporter;

pub use mock_catalog_reader::MockCatalogReader;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
