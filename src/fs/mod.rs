//! File system I/O for the aligner's three text inputs.
//!
//! This module loads edge lists, seed pairs and the pairwise similarity file.
//! Parsers operate over any `BufRead` so tests can feed in-memory strings;
//! the `load_*` wrappers open real files.

mod edge_list;
mod seed_load;
mod sim_load;

pub use edge_list::*;
pub use seed_load::*;
pub use sim_load::*;
