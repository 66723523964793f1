//! Tab-separated tree format.
//!
//! ```text
//! depth   n_features  n_classes   n_nodes
//! index   feature     threshold                       (decision node)
//! index   -1          threshold   count_1 .. count_k  (leaf)
//! ```
//!
//! Nodes are written in the store's insertion order; the reader rebuilds the
//! tree from the explicit index column only. Floats use the shortest text
//! that parses back to the same value, so a write/read cycle is exact. Very
//! small or very large magnitudes switch to exponent notation to keep lines
//! short.
//! Readers accept `\r\n` line endings, trailing tabs and blank lines.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::repr::index::normalize_key;
use crate::repr::{LEAF_FEATURE, Node, NodeIndex, NodeStore, Tree};

use super::error::ReadError;

// =============================================================================
// Writing
// =============================================================================

/// Write `tree` in text form.
pub fn write_tree<W: Write>(tree: &Tree, mut out: W) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        tree.max_depth(),
        tree.n_features(),
        tree.n_classes(),
        tree.n_nodes()
    )?;
    for (index, node) in tree.nodes().iter() {
        write!(
            out,
            "{}\t{}\t{}",
            index,
            node.feature_raw(),
            Float(node.threshold())
        )?;
        if let Some(counts) = node.counts() {
            for &count in counts {
                write!(out, "\t{}", Float(count))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Shortest round-trip decimal, in exponent form outside `[1e-5, 1e16)`.
struct Float(f64);

impl Display for Float {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.0.abs();
        if magnitude != 0.0 && magnitude.is_finite() && !(1e-5..1e16).contains(&magnitude) {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Render `tree` as a string.
pub fn tree_to_string(tree: &Tree) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_tree(tree, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

// =============================================================================
// Reading
// =============================================================================

/// Read a tree and validate its structure.
pub fn read_tree<R: BufRead>(input: R) -> Result<Tree, ReadError> {
    let mut records = Records::new(input);

    let (line, header) = records.next_record()?.ok_or(ReadError::MissingField {
        line: 1,
        field: "depth",
    })?;
    let mut fields = tokens(&header);
    let max_depth: u32 = parse_field(line, "depth", fields.next())?;
    let n_features: usize = parse_field(line, "n_features", fields.next())?;
    let n_classes: usize = parse_field(line, "n_classes", fields.next())?;
    let n_nodes: usize = parse_field(line, "n_nodes", fields.next())?;
    reject_extra(line, fields.next())?;

    let mut nodes = NodeStore::for_depth(max_depth);
    for got in 0..n_nodes {
        let Some((line, record)) = records.next_record()? else {
            return Err(ReadError::UnexpectedEnd {
                expected: n_nodes,
                got,
            });
        };
        let (index, node) = parse_node(line, &record, n_classes)?;
        if nodes.has(index) {
            return Err(ReadError::DuplicateNode { line, index });
        }
        nodes.add(index, node);
    }

    if let Some((line, _)) = records.next_record()? {
        return Err(ReadError::TrailingRecord { line });
    }

    let tree = Tree::new(max_depth, None, n_features, n_classes, nodes);
    tree.validate()?;
    Ok(tree)
}

/// Parse a tree from a string.
pub fn tree_from_str(text: &str) -> Result<Tree, ReadError> {
    read_tree(text.as_bytes())
}

fn parse_node(line: usize, record: &str, n_classes: usize) -> Result<(NodeIndex, Node), ReadError> {
    let mut fields = tokens(record);
    let index = parse_index(line, fields.next())?;
    let feature: i64 = parse_field(line, "feature", fields.next())?;
    let threshold: f64 = parse_field(line, "threshold", fields.next())?;

    let node = if feature == LEAF_FEATURE {
        let counts = (0..n_classes)
            .map(|_| parse_field::<f64>(line, "count", fields.next()))
            .collect::<Result<Vec<_>, _>>()?;
        Node::leaf(counts)
    } else if feature < 0 {
        return Err(ReadError::InvalidValue {
            line,
            field: "feature",
            message: format!("{feature} is neither a feature id nor {LEAF_FEATURE}"),
        });
    } else {
        Node::split(feature as usize, threshold)
    };
    reject_extra(line, fields.next())?;

    Ok((index, node))
}

/// Node index; negative keys fold onto their absolute value.
fn parse_index(line: usize, token: Option<&str>) -> Result<NodeIndex, ReadError> {
    let token = token.ok_or(ReadError::MissingField {
        line,
        field: "index",
    })?;
    if let Ok(index) = token.parse::<u64>() {
        return Ok(index);
    }
    token
        .parse::<i64>()
        .map(normalize_key)
        .map_err(|e| ReadError::InvalidValue {
            line,
            field: "index",
            message: format!("{token:?}: {e}"),
        })
}

fn parse_field<T>(line: usize, field: &'static str, token: Option<&str>) -> Result<T, ReadError>
where
    T: FromStr,
    T::Err: Display,
{
    let token = token.ok_or(ReadError::MissingField { line, field })?;
    token.parse().map_err(|e| ReadError::InvalidValue {
        line,
        field,
        message: format!("{token:?}: {e}"),
    })
}

fn reject_extra(line: usize, token: Option<&str>) -> Result<(), ReadError> {
    match token {
        None => Ok(()),
        Some(extra) => Err(ReadError::InvalidValue {
            line,
            field: "record",
            message: format!("unexpected trailing field {extra:?}"),
        }),
    }
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(['\t', '\r', '\n']).filter(|s| !s.is_empty())
}

/// Non-blank lines with 1-based line numbers.
struct Records<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    fn next_record(&mut self) -> Result<Option<(usize, String)>, ReadError> {
        for text in self.lines.by_ref() {
            let text = text?;
            self.line += 1;
            if tokens(&text).next().is_some() {
                return Ok(Some((self.line, text)));
            }
        }
        Ok(None)
    }
}
