//! Reads adjacency-matrix text files into an in-memory graph.

use std::io::Read;
use std::path::Path;

use crate::graph::MatrixGraph;
use crate::types::{GraphError, GraphResult, Weight, MAX_VERTICES};

/// Reader for adjacency-matrix text files.
///
/// The format is a vertex count `n` followed by `n * n` whitespace-separated
/// non-negative integers, row-major. `0` means no edge.
pub struct MatrixReader;

impl MatrixReader {
    /// Read a matrix file into a MatrixGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<MatrixGraph> {
        let data = std::fs::read(path)?;
        log::debug!("reading graph from {}", path.display());
        Self::parse(decode(&data)?)
    }

    /// Read from any reader into a MatrixGraph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<MatrixGraph> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::parse(decode(&data)?)
    }

    /// Parse matrix text into a MatrixGraph.
    pub fn parse(text: &str) -> GraphResult<MatrixGraph> {
        let mut tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));

        let (line, token) = tokens.next().ok_or_else(|| GraphError::MalformedInput {
            line: 1,
            message: "missing vertex count".to_string(),
        })?;
        let vertex_count: usize = parse_number(line, token, "vertex count")?;
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }

        let expected = vertex_count * vertex_count;
        let mut cells: Vec<Weight> = Vec::new();
        cells.try_reserve_exact(expected)?;

        let mut last_line = line;
        while cells.len() < expected {
            let Some((line, token)) = tokens.next() else {
                return Err(GraphError::MalformedInput {
                    line: last_line,
                    message: format!(
                        "expected {} matrix entries, found {}",
                        expected,
                        cells.len()
                    ),
                });
            };
            cells.push(parse_number(line, token, "edge weight")?);
            last_line = line;
        }

        let trailing = tokens.count();
        if trailing > 0 {
            log::warn!("ignoring {} tokens after the matrix", trailing);
        }

        MatrixGraph::from_flat(vertex_count, cells)
    }
}

/// Bytes that are not UTF-8 are bad content, not an I/O failure.
fn decode(data: &[u8]) -> GraphResult<&str> {
    std::str::from_utf8(data).map_err(|e| {
        let valid = &data[..e.valid_up_to()];
        GraphError::MalformedInput {
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
            message: format!("invalid UTF-8 at byte {}", e.valid_up_to()),
        }
    })
}

fn parse_number<T: std::str::FromStr>(line: usize, token: &str, what: &str) -> GraphResult<T> {
    token.parse().map_err(|_| GraphError::MalformedInput {
        line,
        message: format!("invalid {}: {:?}", what, token),
    })
}
