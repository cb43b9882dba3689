use crate::store::TotalF64;

/// An unresolved correspondence hypothesis between one node in each graph.
///
/// Candidates are ordered by similarity score (ascending, so the store's tail
/// is the best pending hypothesis). The node pair does not participate in the
/// ordering: distinct pairs sharing a score coexist as distinct entries.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Candidate {
    /// Similarity score between the two endpoints.
    pub score: TotalF64,

    /// Node index in graph 1.
    pub left: usize,

    /// Node index in graph 2.
    pub right: usize,
}

impl Candidate {
    pub fn new(score: f64, left: usize, right: usize) -> Self {
        Candidate {
            score: score.into(),
            left,
            right,
        }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}
