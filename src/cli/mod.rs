//! Command-line shell around the graph library.

pub mod commands;
