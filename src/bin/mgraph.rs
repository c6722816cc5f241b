//! CLI entry point for the `mgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use matrix_graph::cli::commands;
use matrix_graph::graph::TraversalKind;
use matrix_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "mgraph",
    about = "Traversals and shortest paths over adjacency-matrix graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the adjacency list
    Adjacency {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Breadth-first traversal
    Bfs {
        /// Path to the matrix file
        file: PathBuf,
        /// Start vertex (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
    /// Depth-first traversal
    Dfs {
        /// Path to the matrix file
        file: PathBuf,
        /// Start vertex (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
    /// Shortest distances from a start vertex (Dijkstra)
    Dijkstra {
        /// Path to the matrix file
        file: PathBuf,
        /// Start vertex (1-based)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        start: u32,
    },
    /// Vertex and edge counts
    Info {
        /// Path to the matrix file
        file: PathBuf,
    },
    /// Interactive menu
    Menu {
        /// Path to the matrix file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Adjacency { file } => commands::cmd_adjacency(&file, json),
        Commands::Bfs { file, start } => {
            commands::cmd_traverse(&file, index(start), TraversalKind::Breadth, json)
        }
        Commands::Dfs { file, start } => {
            commands::cmd_traverse(&file, index(start), TraversalKind::Depth, json)
        }
        Commands::Dijkstra { file, start } => commands::cmd_dijkstra(&file, index(start), json),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Menu { file } => commands::cmd_menu(&file),
    };

    if let Err(e) = result {
        match &e {
            GraphError::InvalidVertex { vertex, count } => eprintln!(
                "Error: start vertex {} out of range 1..={}",
                vertex + 1,
                count
            ),
            _ => eprintln!("Error: {}", e),
        }
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedInput { .. }
            | GraphError::TooManyVertices { .. }
            | GraphError::RowCount { .. }
            | GraphError::MatrixShape { .. } => 2,
            GraphError::InvalidVertex { .. } => 4,
            GraphError::Allocation => 5,
        };
        process::exit(code);
    }
}

/// 1-based CLI vertex to 0-based library index.
fn index(start: u32) -> usize {
    start as usize - 1
}
