use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::{
    align::AlignConfig,
    error::{AlignError, Result},
    graph::{Adjacency, SimilarityMatrix, frontier},
    statistics::Stats,
    store::CandidateStore,
};

/// The initial aligned pairs, as two parallel index sequences.
#[derive(Debug)]
pub struct SeedList {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl SeedList {
    pub fn new(left: Vec<usize>, right: Vec<usize>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(AlignError::SeedMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(SeedList { left, right })
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Outcome of a run: the ordered aligned pairs (seeds first, then one pair
/// per accepted iteration) and the run's counters.
pub struct Alignment {
    pub pairs: Vec<(usize, usize)>,
    pub stats: Stats,
}

/// Greedy seed-and-extend alignment driver.
///
/// Starting from the seed pairs, the driver keeps a store of pending
/// candidate pairs keyed by similarity, repeatedly commits the best one above
/// the threshold, and refills the store from the neighborhoods of the two
/// just-aligned nodes. Re-expansion is local to the accepted pair rather
/// than recomputed over the whole aligned set, which keeps each iteration's
/// cost proportional to local degree.
///
/// A popped candidate can be stale: its endpoint may have been aligned
/// through a different pair accepted after the candidate was inserted.
/// Liveness is therefore re-checked at pop time and stale candidates are
/// discarded without consuming the iteration budget, so a node is never
/// aligned twice.
pub struct Aligner<'a> {
    graph1: &'a Adjacency,
    graph2: &'a Adjacency,
    similarity: &'a SimilarityMatrix,
    config: AlignConfig,
}

impl<'a> Aligner<'a> {
    pub fn new(
        graph1: &'a Adjacency,
        graph2: &'a Adjacency,
        similarity: &'a SimilarityMatrix,
        config: AlignConfig,
    ) -> Result<Self> {
        config.validate()?;
        if similarity.rows() != graph1.order() || similarity.cols() != graph2.order() {
            return Err(AlignError::InvalidConfig(format!(
                "similarity matrix is {}x{} but the graphs have {} and {} nodes",
                similarity.rows(),
                similarity.cols(),
                graph1.order(),
                graph2.order()
            )));
        }
        Ok(Aligner {
            graph1,
            graph2,
            similarity,
            config,
        })
    }

    pub fn run(&self, seeds: &SeedList) -> Result<Alignment> {
        let mut store = CandidateStore::new(self.config.store)?;
        let mut stats = Stats::new();

        let mut aligned1: HashSet<usize> = seeds.left.iter().copied().collect();
        let mut aligned2: HashSet<usize> = seeds.right.iter().copied().collect();
        let mut pairs: Vec<(usize, usize)> = seeds
            .left
            .iter()
            .zip(seeds.right.iter())
            .map(|(&a, &b)| (a, b))
            .collect();

        let frontier1 = frontier(&seeds.left, self.graph1);
        let frontier2 = frontier(&seeds.right, self.graph2);
        debug!(
            graph1_frontier = frontier1.len(),
            graph2_frontier = frontier2.len(),
            "seeded initial neighborhoods"
        );
        self.offer_candidates(
            &frontier1, &frontier2, &aligned1, &aligned2, &mut store, &mut stats,
        )?;

        let mut accepted = 0;
        while accepted < self.config.max_iterations {
            let Some(candidate) = store.pop_above(self.config.threshold) else {
                debug!("no remaining candidate above threshold, converged");
                break;
            };
            stats.bump_pops();

            // Liveness re-check at pop time: an endpoint may have been
            // aligned by a pair accepted after this candidate was inserted.
            if aligned1.contains(&candidate.left) || aligned2.contains(&candidate.right) {
                trace!(
                    left = candidate.left,
                    right = candidate.right,
                    "discarding stale candidate"
                );
                stats.bump_stale();
                continue;
            }

            debug!(
                score = candidate.score.0,
                left = candidate.left,
                right = candidate.right,
                "accepted candidate pair"
            );
            pairs.push((candidate.left, candidate.right));
            aligned1.insert(candidate.left);
            aligned2.insert(candidate.right);
            accepted += 1;
            stats.bump_accepted();

            let frontier1 = frontier(&[candidate.left], self.graph1);
            let frontier2 = frontier(&[candidate.right], self.graph2);
            self.offer_candidates(
                &frontier1, &frontier2, &aligned1, &aligned2, &mut store, &mut stats,
            )?;
        }

        Ok(Alignment { pairs, stats })
    }

    /// Inserts every live neighbor pair with strictly positive similarity.
    /// Pairs with an already-aligned endpoint are dead on arrival and never
    /// enter the store.
    fn offer_candidates(
        &self,
        frontier1: &[usize],
        frontier2: &[usize],
        aligned1: &HashSet<usize>,
        aligned2: &HashSet<usize>,
        store: &mut CandidateStore,
        stats: &mut Stats,
    ) -> Result<()> {
        for &n1 in frontier1 {
            if aligned1.contains(&n1) {
                continue;
            }
            for &n2 in frontier2 {
                if aligned2.contains(&n2) {
                    continue;
                }
                let similarity = self.similarity.score(n1, n2);
                if similarity > 0.0 {
                    trace!(n1, n2, similarity, "inserting candidate");
                    store.insert(similarity, n1, n2)?;
                    stats.bump_inserted();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreParams;

    fn config(max_iterations: usize) -> AlignConfig {
        AlignConfig {
            threshold: 0.1,
            max_iterations,
            store: StoreParams {
                seed: Some(42),
                ..StoreParams::default()
            },
        }
    }

    fn path_graph(order: usize) -> Adjacency {
        let mut adj = Adjacency::new(order);
        for i in 1..order {
            adj.connect(i - 1, i, 1);
        }
        adj
    }

    fn star_graph(order: usize) -> Adjacency {
        let mut adj = Adjacency::new(order);
        for i in 1..order {
            adj.connect(0, i, 1);
        }
        adj
    }

    #[test]
    fn single_edge_extends_the_seed() {
        let g1 = path_graph(2);
        let g2 = path_graph(2);
        let mut sim = SimilarityMatrix::zeros(2, 2);
        sim.set(1, 1, 0.8).unwrap();

        let aligner = Aligner::new(&g1, &g2, &sim, config(10)).unwrap();
        let seeds = SeedList::new(vec![0], vec![0]).unwrap();
        let result = aligner.run(&seeds).unwrap();

        assert_eq!(result.pairs, vec![(0, 0), (1, 1)]);
        assert_eq!(result.stats.get_pairs_accepted(), 1);
    }

    #[test]
    fn stale_candidates_do_not_consume_the_budget() {
        // Seeds (0,0); the initial frontier cross product yields four
        // candidates, two of which share graph-1 node 2 or graph-2 node 1.
        let g1 = star_graph(3);
        let g2 = star_graph(3);
        let mut sim = SimilarityMatrix::zeros(3, 3);
        sim.set(1, 1, 0.9).unwrap();
        sim.set(2, 1, 0.85).unwrap();
        sim.set(2, 2, 0.8).unwrap();
        sim.set(1, 2, 0.05).unwrap(); // positive, but below threshold

        let aligner = Aligner::new(&g1, &g2, &sim, config(2)).unwrap();
        let seeds = SeedList::new(vec![0], vec![0]).unwrap();
        let result = aligner.run(&seeds).unwrap();

        // (1,1) is accepted first, which makes the (2,1) pop stale; the
        // discard must not count against max_iterations, so (2,2) still
        // lands within a budget of two.
        assert_eq!(result.pairs, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(result.stats.get_pairs_accepted(), 2);
        assert_eq!(result.stats.get_stale_discarded(), 1);
        assert_eq!(result.stats.get_pops(), 3);
    }

    #[test]
    fn no_node_is_aligned_twice() {
        let g1 = star_graph(5);
        let g2 = star_graph(5);
        let mut sim = SimilarityMatrix::zeros(5, 5);
        // Every cross pair is plausible, many sharing endpoints.
        for a in 1..5 {
            for b in 1..5 {
                sim.set(a, b, 0.2 + 0.01 * (a * 5 + b) as f64).unwrap();
            }
        }

        let aligner = Aligner::new(&g1, &g2, &sim, config(10)).unwrap();
        let seeds = SeedList::new(vec![0], vec![0]).unwrap();
        let result = aligner.run(&seeds).unwrap();

        let lefts: HashSet<usize> = result.pairs.iter().map(|&(a, _)| a).collect();
        let rights: HashSet<usize> = result.pairs.iter().map(|&(_, b)| b).collect();
        assert_eq!(lefts.len(), result.pairs.len());
        assert_eq!(rights.len(), result.pairs.len());
    }

    #[test]
    fn iteration_cap_bounds_accepted_pairs() {
        let g1 = star_graph(6);
        let g2 = star_graph(6);
        let mut sim = SimilarityMatrix::zeros(6, 6);
        for i in 1..6 {
            sim.set(i, i, 0.5).unwrap();
        }

        let aligner = Aligner::new(&g1, &g2, &sim, config(2)).unwrap();
        let seeds = SeedList::new(vec![0], vec![0]).unwrap();
        let result = aligner.run(&seeds).unwrap();

        assert_eq!(result.pairs.len(), 3); // seed + exactly two accepted
        assert_eq!(result.stats.get_pairs_accepted(), 2);
    }

    #[test]
    fn below_threshold_candidates_never_align() {
        let g1 = path_graph(2);
        let g2 = path_graph(2);
        let mut sim = SimilarityMatrix::zeros(2, 2);
        sim.set(1, 1, 0.05).unwrap();

        let aligner = Aligner::new(&g1, &g2, &sim, config(10)).unwrap();
        let seeds = SeedList::new(vec![0], vec![0]).unwrap();
        let result = aligner.run(&seeds).unwrap();

        assert_eq!(result.pairs, vec![(0, 0)]);
        assert_eq!(result.stats.get_candidates_inserted(), 1);
        assert_eq!(result.stats.get_pops(), 0);
    }

    #[test]
    fn empty_seed_list_yields_empty_alignment() {
        let g1 = path_graph(3);
        let g2 = path_graph(3);
        let sim = SimilarityMatrix::zeros(3, 3);

        let aligner = Aligner::new(&g1, &g2, &sim, config(10)).unwrap();
        let seeds = SeedList::new(vec![], vec![]).unwrap();
        let result = aligner.run(&seeds).unwrap();
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn mismatched_seed_columns_are_rejected() {
        assert!(matches!(
            SeedList::new(vec![0, 1], vec![0]),
            Err(AlignError::SeedMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn mismatched_similarity_dimensions_are_rejected() {
        let g1 = path_graph(3);
        let g2 = path_graph(3);
        let sim = SimilarityMatrix::zeros(2, 3);
        assert!(matches!(
            Aligner::new(&g1, &g2, &sim, config(10)),
            Err(AlignError::InvalidConfig(_))
        ));
    }
}
