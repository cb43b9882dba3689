//! The greedy alignment driver and its configuration.

mod config;
mod driver;

pub use config::*;
pub use driver::*;
