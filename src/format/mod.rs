//! Text file I/O for adjacency-matrix files.

pub mod reader;
pub mod writer;

pub use reader::MatrixReader;
pub use writer::MatrixWriter;
