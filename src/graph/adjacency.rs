/// Square adjacency matrix over one graph's node indices.
///
/// # Invariants
/// - `matrix` is `order x order`; row `i` describes node `i`.
/// - Edges are stored symmetrically; a nonzero entry means "adjacent".
///
/// Weights beyond 0/1 are preserved as parsed, but only nonzero-ness matters
/// for neighborhood expansion.
#[derive(Debug)]
pub struct Adjacency {
    matrix: Vec<Vec<u32>>,
}

impl Adjacency {
    pub fn new(order: usize) -> Self {
        Adjacency {
            matrix: vec![vec![0; order]; order],
        }
    }

    /// Number of nodes in the graph.
    pub fn order(&self) -> usize {
        self.matrix.len()
    }

    /// Records an undirected edge between `a` and `b`.
    ///
    /// # Panics
    /// If either index is out of bounds (violates the construction contract:
    /// indices come from the graph's own name table).
    pub fn connect(&mut self, a: usize, b: usize, weight: u32) {
        self.matrix[a][b] = weight;
        self.matrix[b][a] = weight;
    }

    /// Ordered node indices adjacent to `node` (nonzero row entries).
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix[node]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(i, _)| i)
    }
}
