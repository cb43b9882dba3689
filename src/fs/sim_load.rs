use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use crate::{
    error::{AlignError, Result},
    fs::NodeNames,
    graph::SimilarityMatrix,
};

/// Parses the similarity file: `name1 name2 value` triples, one per line,
/// into a dense |V1|x|V2| matrix. Pairs the file does not mention stay at
/// zero ("not a plausible correspondence"). Non-finite values are rejected.
pub fn parse_similarity<R: BufRead>(
    reader: R,
    names1: &NodeNames,
    names2: &NodeNames,
    label: &str,
) -> Result<SimilarityMatrix> {
    let mut sim = SimilarityMatrix::zeros(names1.len(), names2.len());

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[a, b, value] = fields.as_slice() else {
            return Err(AlignError::Parse {
                path: label.to_owned(),
                line: lineno + 1,
                msg: format!(
                    "expected 'name1 name2 similarity', got {} fields",
                    fields.len()
                ),
            });
        };
        let value = value.parse::<f64>().map_err(|e| AlignError::Parse {
            path: label.to_owned(),
            line: lineno + 1,
            msg: format!("bad similarity {value:?}: {e}"),
        })?;
        let a = names1.get(a).ok_or_else(|| AlignError::UnknownNode {
            name: a.to_owned(),
            path: label.to_owned(),
        })?;
        let b = names2.get(b).ok_or_else(|| AlignError::UnknownNode {
            name: b.to_owned(),
            path: label.to_owned(),
        })?;
        sim.set(a, b, value)?;
    }

    Ok(sim)
}

pub fn load_similarity(
    path: &Path,
    names1: &NodeNames,
    names2: &NodeNames,
) -> Result<SimilarityMatrix> {
    let file = BufReader::new(File::open(path)?);
    parse_similarity(file, names1, names2, &path.display().to_string())
}
