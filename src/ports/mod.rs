/// Ports module defining interfaces for hexagonal architecture
///
/// The catalog engine itself is pure; these outbound ports describe the
/// infrastructure the browse use case drives (file system, console, output).
pub mod outbound;
