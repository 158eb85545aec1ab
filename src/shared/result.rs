/// Crate-wide result type; errors are carried as `anyhow::Error` so adapters
/// can attach context while domain code stays free of I/O concerns.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
