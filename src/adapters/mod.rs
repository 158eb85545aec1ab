/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: catalog files, report
/// formats, output sinks and console feedback.
pub mod outbound;
