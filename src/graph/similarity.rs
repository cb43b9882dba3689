use crate::error::{AlignError, Result};

/// Dense pairwise similarity over the cross product of both graphs' node
/// indices. Row `a` covers node `a` of graph 1, column `b` node `b` of
/// graph 2. Zero or negative means "not a plausible correspondence";
/// unspecified pairs stay at zero.
#[derive(Debug)]
pub struct SimilarityMatrix {
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        SimilarityMatrix {
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.values.len() / self.cols
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Records the similarity between node `a` of graph 1 and node `b` of
    /// graph 2.
    ///
    /// # Errors
    /// [`AlignError::MalformedScore`] for NaN or infinite values; these would
    /// otherwise poison every comparison downstream.
    pub fn set(&mut self, a: usize, b: usize, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(AlignError::MalformedScore(value));
        }
        self.values[a * self.cols + b] = value;
        Ok(())
    }

    pub fn score(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.cols + b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_pairs_default_to_zero() {
        let sim = SimilarityMatrix::zeros(2, 3);
        assert_eq!(sim.rows(), 2);
        assert_eq!(sim.cols(), 3);
        assert_eq!(sim.score(1, 2), 0.0);
    }

    #[test]
    fn set_then_score() {
        let mut sim = SimilarityMatrix::zeros(2, 2);
        sim.set(0, 1, 0.8).unwrap();
        sim.set(1, 0, -0.5).unwrap();
        assert_eq!(sim.score(0, 1), 0.8);
        assert_eq!(sim.score(1, 0), -0.5);
        assert_eq!(sim.score(0, 0), 0.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut sim = SimilarityMatrix::zeros(1, 1);
        assert!(matches!(
            sim.set(0, 0, f64::NAN),
            Err(AlignError::MalformedScore(_))
        ));
    }
}
