use hashbrown::HashMap;
use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use crate::{
    error::{AlignError, Result},
    graph::Adjacency,
};

/// Bidirectional node name table for one graph. Indices are assigned by
/// first appearance in the edge list.
#[derive(Debug)]
pub struct NodeNames {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeNames {
    pub fn new() -> Self {
        NodeNames {
            names: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Index for `name`, allocating the next one on first sight.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), idx);
        idx
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for NodeNames {
    fn default() -> Self {
        NodeNames::new()
    }
}

/// Parses a whitespace-separated edge list of node names, one edge per line,
/// with an optional integer weight as a third column (default 1). Empty
/// lines and lines starting with `#` are skipped.
pub fn parse_edge_list<R: BufRead>(reader: R, label: &str) -> Result<(Adjacency, NodeNames)> {
    let mut names = NodeNames::new();
    let mut edges: Vec<(usize, usize, u32)> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (a, b, weight) = match fields.as_slice() {
            [a, b] => (*a, *b, 1),
            [a, b, w] => {
                let weight = w.parse::<u32>().map_err(|e| AlignError::Parse {
                    path: label.to_owned(),
                    line: lineno + 1,
                    msg: format!("bad edge weight {w:?}: {e}"),
                })?;
                (*a, *b, weight)
            }
            _ => {
                return Err(AlignError::Parse {
                    path: label.to_owned(),
                    line: lineno + 1,
                    msg: format!("expected two node names per edge, got {} fields", fields.len()),
                });
            }
        };
        let a = names.intern(a);
        let b = names.intern(b);
        edges.push((a, b, weight));
    }

    let mut adj = Adjacency::new(names.len());
    for (a, b, weight) in edges {
        adj.connect(a, b, weight);
    }
    Ok((adj, names))
}

pub fn load_edge_list(path: &Path) -> Result<(Adjacency, NodeNames)> {
    let file = BufReader::new(File::open(path)?);
    parse_edge_list(file, &path.display().to_string())
}
