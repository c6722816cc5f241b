//! Writes adjacency-matrix text files from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::MatrixGraph;
use crate::types::GraphResult;

/// Writer for adjacency-matrix text files, the inverse of `MatrixReader`.
pub struct MatrixWriter;

impl MatrixWriter {
    /// Write a MatrixGraph to a matrix file.
    pub fn write_to_file(graph: &MatrixGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a MatrixGraph to any writer: the vertex count, then one row per line.
    pub fn write_to(graph: &MatrixGraph, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(writer, "{}", graph.vertex_count())?;
        for row in graph.rows() {
            let line: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
