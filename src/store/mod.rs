//! Priority storage for pending alignment candidates.
//!
//! The centerpiece is [`CandidateStore`], an arena-backed skip list keyed by
//! similarity score with threshold-gated extraction of the best pending
//! pair. [`Candidate`] is the stored entry and [`TotalF64`] the total-order
//! float wrapper that keys it.

mod candidate;
mod skip_list;
mod total_float;

pub use candidate::*;
pub use skip_list::*;
pub use total_float::*;
