use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use crate::{
    align::SeedList,
    error::{AlignError, Result},
    fs::NodeNames,
};

/// Parses the seed file: one `name1 name2` pair per line, resolved against
/// each graph's name table. Empty lines and `#` comments are skipped.
pub fn parse_seeds<R: BufRead>(
    reader: R,
    names1: &NodeNames,
    names2: &NodeNames,
    label: &str,
) -> Result<SeedList> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[a, b] = fields.as_slice() else {
            return Err(AlignError::Parse {
                path: label.to_owned(),
                line: lineno + 1,
                msg: format!("expected two node names per seed, got {} fields", fields.len()),
            });
        };
        let a = names1.get(a).ok_or_else(|| AlignError::UnknownNode {
            name: a.to_owned(),
            path: label.to_owned(),
        })?;
        let b = names2.get(b).ok_or_else(|| AlignError::UnknownNode {
            name: b.to_owned(),
            path: label.to_owned(),
        })?;
        left.push(a);
        right.push(b);
    }

    SeedList::new(left, right)
}

pub fn load_seeds(path: &Path, names1: &NodeNames, names2: &NodeNames) -> Result<SeedList> {
    let file = BufReader::new(File::open(path)?);
    parse_seeds(file, names1, names2, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(names: &[&str]) -> NodeNames {
        let mut t = NodeNames::new();
        for n in names {
            t.intern(n);
        }
        t
    }

    #[test]
    fn resolves_names_to_indices() {
        let n1 = table(&["a", "b", "c"]);
        let n2 = table(&["x", "y"]);
        let seeds = parse_seeds("a x\nc y\n".as_bytes(), &n1, &n2, "seed.txt").unwrap();
        assert_eq!(seeds.left, vec![0, 2]);
        assert_eq!(seeds.right, vec![0, 1]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let n1 = table(&["a"]);
        let n2 = table(&["x"]);
        let err = parse_seeds("a z\n".as_bytes(), &n1, &n2, "seed.txt").unwrap_err();
        assert!(matches!(err, AlignError::UnknownNode { .. }));
    }

    #[test]
    fn malformed_line_is_an_error() {
        let n1 = table(&["a"]);
        let n2 = table(&["x"]);
        let err = parse_seeds("a x extra\n".as_bytes(), &n1, &n2, "seed.txt").unwrap_err();
        assert!(matches!(err, AlignError::Parse { line: 1, .. }));
    }
}
