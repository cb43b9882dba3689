use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AlignError, Result},
    store::{Candidate, TotalF64},
};

/// Tuning knobs for the candidate store's skip list.
///
/// `max_level` caps how many index levels a node may join and `promotion` is
/// the per-level coin-flip probability, so node heights follow a geometric
/// distribution and searches stay O(log n) expected. A fixed `seed` makes the
/// level draws, and therefore the whole structure, reproducible across runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreParams {
    pub max_level: usize,
    pub promotion: f64,
    pub seed: Option<u64>,
}

impl Default for StoreParams {
    fn default() -> Self {
        StoreParams {
            max_level: 20,
            promotion: 0.5,
            seed: None,
        }
    }
}

struct SkipNode {
    entry: Candidate,
    /// Forward link per level this node participates in. `None` marks the
    /// end of that level's chain.
    forward: Vec<Option<usize>>,
}

/// Ordered multi-map from similarity score to pending candidate pairs.
///
/// Backed by a skip list whose nodes live in an arena `Vec` and link to each
/// other by index, with popped slots recycled through a free list. The chains
/// are sorted ascending, so the best pending candidate is the tail at level 0
/// and [`pop_above`](CandidateStore::pop_above) reaches it by walking right
/// and down from the top populated level.
///
/// # Invariants
/// - Every stored score is finite (enforced on insertion).
/// - A node of height `h` is linked at exactly levels `0..h`.
/// - Distinct pairs with equal scores coexist as distinct entries.
pub struct CandidateStore {
    arena: Vec<SkipNode>,
    free: Vec<usize>,
    /// Header links, one per possible level. `head[lvl]` is the first node
    /// of level `lvl`'s chain.
    head: Vec<Option<usize>>,
    /// Number of currently populated levels.
    level: usize,
    promotion: f64,
    rng: StdRng,
    len: usize,
}

impl CandidateStore {
    pub fn new(params: StoreParams) -> Result<Self> {
        if params.max_level == 0 {
            return Err(AlignError::InvalidConfig(
                "store max_level must be at least 1".into(),
            ));
        }
        if !(params.promotion > 0.0 && params.promotion < 1.0) {
            return Err(AlignError::InvalidConfig(format!(
                "store promotion probability must lie in (0, 1), got {}",
                params.promotion
            )));
        }
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(CandidateStore {
            arena: Vec::new(),
            free: Vec::new(),
            head: vec![None; params.max_level],
            level: 0,
            promotion: params.promotion,
            rng,
            len: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Successor of `at` on level `lvl`'s chain; `None` as `at` is the header.
    fn next_of(&self, at: Option<usize>, lvl: usize) -> Option<usize> {
        match at {
            None => self.head[lvl],
            Some(i) => self.arena[i].forward[lvl],
        }
    }

    fn set_next(&mut self, at: Option<usize>, lvl: usize, to: Option<usize>) {
        match at {
            None => self.head[lvl] = to,
            Some(i) => self.arena[i].forward[lvl] = to,
        }
    }

    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < self.head.len() && self.rng.random::<f64>() < self.promotion {
            height += 1;
        }
        height
    }

    /// Inserts a candidate pair under its similarity score.
    ///
    /// Walks from the top populated level downward, at each level advancing
    /// while the next node's key stays below the new key, and splices the new
    /// node after the recorded predecessor at every level it was promoted to.
    /// Equal scores need no special casing: the new node lands before its
    /// duplicates and both remain.
    ///
    /// # Errors
    /// [`AlignError::MalformedScore`] if `score` is NaN or infinite.
    pub fn insert(&mut self, score: f64, left: usize, right: usize) -> Result<()> {
        if !score.is_finite() {
            return Err(AlignError::MalformedScore(score));
        }
        let key = TotalF64(score);
        let height = self.random_height();

        // Predecessor per level the new node joins; `None` is the header.
        let mut preds: Vec<Option<usize>> = vec![None; height];
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            while let Some(nxt) = self.next_of(cur, lvl) {
                if self.arena[nxt].entry.score < key {
                    cur = Some(nxt);
                } else {
                    break;
                }
            }
            if lvl < height {
                preds[lvl] = cur;
            }
        }

        let node = SkipNode {
            entry: Candidate {
                score: key,
                left,
                right,
            },
            forward: vec![None; height],
        };
        let idx = match self.free.pop() {
            Some(slot) => {
                self.arena[slot] = node;
                slot
            }
            None => {
                self.arena.push(node);
                self.arena.len() - 1
            }
        };
        for lvl in 0..height {
            let after = self.next_of(preds[lvl], lvl);
            self.arena[idx].forward[lvl] = after;
            self.set_next(preds[lvl], lvl, Some(idx));
        }
        self.level = self.level.max(height);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the best pending candidate, provided its score is
    /// at least `threshold`. Returns `None` without mutating the store when
    /// it is empty or when the maximum remaining score falls short.
    pub fn pop_above(&mut self, threshold: f64) -> Option<Candidate> {
        if self.len == 0 {
            return None;
        }

        // The maximum is the tail of every chain it participates in, so the
        // walk stops one node short of each tail: `preds[lvl]` then points at
        // the maximum exactly on the levels it is linked at.
        let mut preds: Vec<Option<usize>> = vec![None; self.level];
        let mut cur: Option<usize> = None;
        for lvl in (0..self.level).rev() {
            while let Some(nxt) = self.next_of(cur, lvl) {
                if self.next_of(Some(nxt), lvl).is_some() {
                    cur = Some(nxt);
                } else {
                    break;
                }
            }
            preds[lvl] = cur;
        }

        let max = self.next_of(preds[0], 0)?;
        let best = self.arena[max].entry;
        if best.score.0 < threshold {
            return None;
        }

        for lvl in 0..self.arena[max].forward.len() {
            debug_assert_eq!(self.next_of(preds[lvl], lvl), Some(max));
            self.set_next(preds[lvl], lvl, None);
        }
        while self.level > 0 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }
        self.free.push(max);
        self.len -= 1;
        Some(best)
    }
}
