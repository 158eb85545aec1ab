/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, output sinks).
pub mod catalog_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use formatter::CatalogFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
