pub mod align;
pub mod error;
pub mod fs;
pub mod graph;
pub mod statistics;
pub mod store;
