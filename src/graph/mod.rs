//! Read-only graph structures consumed by the alignment driver.
//!
//! # Submodules
//!
//! - adjacency: per-graph 0/weight matrix with ordered neighbor queries
//! - expander: neighborhood-union frontier computation around seed nodes
//! - similarity: dense cross-graph similarity lookup

mod adjacency;
mod expander;
mod similarity;

pub use adjacency::*;
pub use expander::*;
pub use similarity::*;
