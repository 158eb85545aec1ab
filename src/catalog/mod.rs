//! Catalog query engine: pure, synchronous transformations over an
//! in-memory product collection.
//!
//! Nothing in this module performs I/O or keeps state between calls.

pub mod domain;
pub mod policies;
pub mod services;
