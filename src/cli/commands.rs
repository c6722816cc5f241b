//! CLI command implementations.
//!
//! Vertices are 0-based inside the library and 1-based in everything printed.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::format::MatrixReader;
use crate::graph::{dijkstra, traverse, MatrixGraph, TraversalKind};
use crate::types::{GraphResult, ShortestPaths};

/// Display the adjacency list of a matrix file.
pub fn cmd_adjacency(path: &Path, json: bool) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path)?;

    if json {
        let lists: Vec<serde_json::Value> = (0..graph.vertex_count())
            .map(|v| {
                let neighbors: Vec<usize> = graph.neighbors(v).iter().map(|&n| n + 1).collect();
                serde_json::json!({"vertex": v + 1, "neighbors": neighbors})
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&lists).unwrap_or_default()
        );
    } else {
        print!("{}", render_adjacency(&graph));
    }
    Ok(())
}

/// Run a BFS or DFS from `start` (0-based) and print the visit order.
pub fn cmd_traverse(path: &Path, start: usize, kind: TraversalKind, json: bool) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path)?;
    let order = traverse(&graph, start, kind)?;

    if json {
        let visited: Vec<usize> = order.iter().map(|&v| v + 1).collect();
        println!(
            "{}",
            serde_json::json!({"algorithm": kind, "start": start + 1, "order": visited})
        );
    } else {
        print!("{}", render_traversal(kind, &order));
    }
    Ok(())
}

/// Run Dijkstra from `start` (0-based) and print the distance to every vertex.
pub fn cmd_dijkstra(path: &Path, start: usize, json: bool) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path)?;
    let paths = dijkstra(&graph, start)?;

    if json {
        let rows: Vec<serde_json::Value> = paths
            .iter()
            .map(|(v, d)| serde_json::json!({"vertex": v + 1, "distance": d}))
            .collect();
        let doc = serde_json::json!({"start": start + 1, "distances": rows});
        println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
    } else {
        print!("{}", render_distances(&paths));
    }
    Ok(())
}

/// Display summary information about a matrix file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "symmetric": graph.is_symmetric(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!(
            "Kind: {}",
            if graph.is_symmetric() {
                "undirected"
            } else {
                "directed"
            }
        );
    }
    Ok(())
}

/// Load a matrix file and run the interactive menu on stdin/stdout.
pub fn cmd_menu(path: &Path) -> GraphResult<()> {
    let graph = MatrixReader::read_from_file(path)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_menu(&graph, &mut stdin.lock(), &mut stdout.lock())
}

/// The interactive menu loop. Every algorithm starts from vertex 1.
///
/// Ends on choice `5` or end of input. Algorithm errors are reported and the
/// loop continues.
pub fn run_menu(
    graph: &MatrixGraph,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> GraphResult<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", MENU)?;
        write!(output, "Enter a Choice: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "Exiting...")?;
            return Ok(());
        }

        let rendered = match line.trim().parse::<u32>() {
            Ok(1) => Ok(render_adjacency(graph)),
            Ok(2) => traverse(graph, 0, TraversalKind::Breadth)
                .map(|order| render_traversal(TraversalKind::Breadth, &order)),
            Ok(3) => traverse(graph, 0, TraversalKind::Depth)
                .map(|order| render_traversal(TraversalKind::Depth, &order)),
            Ok(4) => dijkstra(graph, 0).map(|paths| render_distances(&paths)),
            Ok(5) => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            _ => Ok("Invalid choice. Please try again.\n".to_string()),
        };

        match rendered {
            Ok(text) => write!(output, "{}", text)?,
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

const MENU: &str = "\nMenu:\n\
1. Display Adjacency List\n\
2. Perform Breadth-First Search (BFS)\n\
3. Perform Depth-First Search (DFS)\n\
4. Find Shortest Path using Dijkstra's Algorithm\n\
5. Exit\n";

/// Render the adjacency list, one `Vertex i: -> a -> b NULL` line per vertex.
pub fn render_adjacency(graph: &MatrixGraph) -> String {
    let mut out = String::from("Adjacency List:\n");
    for v in 0..graph.vertex_count() {
        out.push_str(&format!("Vertex {}:", v + 1));
        for &n in graph.neighbors(v) {
            out.push_str(&format!(" -> {}", n + 1));
        }
        out.push_str(" NULL\n");
    }
    out
}

/// Render a traversal order under its heading.
pub fn render_traversal(kind: TraversalKind, order: &[usize]) -> String {
    let heading = match kind {
        TraversalKind::Breadth => "Final BFS Order:",
        TraversalKind::Depth => "DFS Order:",
    };
    let vertices: Vec<String> = order.iter().map(|v| (v + 1).to_string()).collect();
    format!("{}\n{}\n", heading, vertices.join(" "))
}

/// Render one distance line per vertex.
pub fn render_distances(paths: &ShortestPaths) -> String {
    let mut out = String::new();
    for (v, distance) in paths.iter() {
        let shown = match distance {
            Some(d) => d.to_string(),
            None => "unreachable".to_string(),
        };
        out.push_str(&format!(
            "Shortest distance from vertex {} to vertex {}: {}\n",
            paths.start + 1,
            v + 1,
            shown
        ));
    }
    out
}
