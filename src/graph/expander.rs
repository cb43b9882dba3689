use hashbrown::HashSet;

use crate::graph::Adjacency;

/// Deduplicated union of the neighborhoods of every node in `seeds`, in
/// first-discovery order. Pure query; deadness filtering happens downstream
/// when candidates are formed.
pub fn frontier(seeds: &[usize], adj: &Adjacency) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &seed in seeds {
        for neighbor in adj.neighbors(seed) {
            if seen.insert(neighbor) {
                out.push(neighbor);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 - 1 - 2
    //  \     /
    //   3 --·
    fn diamond() -> Adjacency {
        let mut adj = Adjacency::new(4);
        adj.connect(0, 1, 1);
        adj.connect(1, 2, 1);
        adj.connect(0, 3, 1);
        adj.connect(3, 2, 1);
        adj
    }

    #[test]
    fn single_seed_is_its_neighborhood() {
        let adj = diamond();
        assert_eq!(frontier(&[1], &adj), vec![0, 2]);
    }

    #[test]
    fn union_deduplicates_shared_neighbors() {
        let adj = diamond();
        // 0 and 2 share neighbors 1 and 3; each appears once.
        assert_eq!(frontier(&[0, 2], &adj), vec![1, 3]);
    }

    #[test]
    fn empty_seed_list_has_empty_frontier() {
        let adj = diamond();
        assert!(frontier(&[], &adj).is_empty());
    }
}
