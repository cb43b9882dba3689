use tracing::info;

/// Counters describing one alignment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    candidates_inserted: usize,
    pops: usize,
    stale_discarded: usize,
    pairs_accepted: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            candidates_inserted: 0,
            pops: 0,
            stale_discarded: 0,
            pairs_accepted: 0,
        }
    }

    /// Record that a new candidate pair entered the store
    pub fn bump_inserted(&mut self) {
        self.candidates_inserted += 1
    }

    /// Record that a candidate was extracted from the store, whether or not
    /// it ended up accepted
    pub fn bump_pops(&mut self) {
        self.pops += 1
    }

    /// Record that a popped candidate was discarded because an endpoint was
    /// already aligned by the time it surfaced
    pub fn bump_stale(&mut self) {
        self.stale_discarded += 1
    }

    /// Record that a popped candidate was committed to the alignment
    pub fn bump_accepted(&mut self) {
        self.pairs_accepted += 1
    }

    pub fn get_candidates_inserted(&self) -> usize {
        self.candidates_inserted
    }

    pub fn get_pops(&self) -> usize {
        self.pops
    }

    pub fn get_stale_discarded(&self) -> usize {
        self.stale_discarded
    }

    pub fn get_pairs_accepted(&self) -> usize {
        self.pairs_accepted
    }

    /// Emit all counters as a single structured log event.
    pub fn dump(&self) {
        info!(
            candidates_inserted = self.candidates_inserted,
            pops = self.pops,
            stale_discarded = self.stale_discarded,
            pairs_accepted = self.pairs_accepted,
            "alignment run statistics"
        );
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}
