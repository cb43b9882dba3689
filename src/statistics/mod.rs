//! Run statistics for alignment operations.
//!
//! This module provides counters for the events an alignment run goes
//! through: candidate insertions, pops, stale discards and accepted pairs.

mod stats;
pub use stats::*;
