/// Use cases - Application business logic
///
/// Use cases orchestrate the catalog services and coordinate with
/// infrastructure through ports.
mod browse_catalog;

pub use browse_catalog::BrowseCatalogUseCase;
