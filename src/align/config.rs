use serde::{Deserialize, Serialize};

use crate::{
    error::{AlignError, Result},
    store::StoreParams,
};

/// Policy constants for one alignment run.
///
/// Everything the greedy loop treats as a constant lives here so callers can
/// tune a run without touching the driver: the acceptance threshold, the
/// iteration budget and the candidate store's skip-list parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Minimum similarity a popped candidate must reach to be accepted.
    pub threshold: f64,

    /// Upper bound on accepted pairs beyond the seeds.
    pub max_iterations: usize,

    pub store: StoreParams,
}

impl Default for AlignConfig {
    fn default() -> Self {
        AlignConfig {
            threshold: 0.1,
            max_iterations: 10,
            store: StoreParams::default(),
        }
    }
}

impl AlignConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(AlignError::InvalidConfig(format!(
                "acceptance threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
