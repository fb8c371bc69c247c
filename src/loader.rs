//! Text adjacency format
//!
//! One line per vertex, tab separated:
//!
//! ```text
//! 1	2,1	3,5
//! 2	3,2
//! 3
//! ```
//!
//! The first field is the (1-based) source vertex, every following field is a
//! `destination,weight` block with a 1-based destination. A blank line or the
//! end of input stops reading. Rows become vertices in line order; indices are
//! shifted to 0-based here so the shortest path strategies never see 1-based
//! values.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, warn};

use crate::graph::{DirectedGraph, Edge, Graph, Weight};
use crate::{Error, Result};

/// Builds a graph from text rows, stopping at the first blank row
///
/// Any malformed row aborts the whole load: skipping it would shift every
/// following vertex index.
pub fn build_graph<W, I, S>(rows: I) -> Result<DirectedGraph<W>>
where
    W: Weight,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = rows
        .into_iter()
        .take_while(|row| !row.as_ref().trim().is_empty())
        .collect();
    let vertex_count = lines.len();

    let mut adjacency = Vec::with_capacity(vertex_count);
    for (index, line) in lines.iter().enumerate() {
        adjacency.push(parse_row(line.as_ref(), index + 1, vertex_count)?);
    }

    let graph = DirectedGraph::from_checked_adjacency(adjacency);
    debug!(
        "loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads a graph from any buffered reader
pub fn read_graph_from<W, R>(reader: R) -> Result<DirectedGraph<W>>
where
    W: Weight,
    R: BufRead,
{
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        rows.push(line);
    }
    build_graph(rows)
}

/// Reads a graph from a file
pub fn read_graph<W, P>(path: P) -> Result<DirectedGraph<W>>
where
    W: Weight,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    debug!("reading graph from {}", path.as_ref().display());
    read_graph_from(BufReader::new(file))
}

/// Writes `graph` in the same 1-based text format `build_graph` reads
pub fn write_graph<W, G, O>(graph: &G, out: &mut O) -> Result<()>
where
    W: Weight,
    G: Graph<W> + ?Sized,
    O: Write + ?Sized,
{
    for vertex in 0..graph.vertex_count() {
        write!(out, "{}", vertex + 1)?;
        for edge in graph.edges_from(vertex)? {
            write!(out, "\t{},{}", edge.destination() + 1, edge.weight())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Parses one row into 0-based edges
fn parse_row<W: Weight>(line: &str, line_number: usize, vertex_count: usize) -> Result<Vec<Edge<W>>> {
    let malformed = |reason: String| Error::MalformedRow {
        line: line_number,
        reason,
    };

    let mut fields = line.trim_end().split('\t').map(str::trim);

    let source_field = fields.next().unwrap_or_default();
    let declared: usize = source_field
        .parse()
        .map_err(|_| malformed(format!("source vertex {:?} is not an integer", source_field)))?;
    if declared != line_number {
        warn!(
            "line {} declares vertex {}; using line order",
            line_number, declared
        );
    }

    let mut edges = Vec::new();
    for block in fields {
        let (destination, weight) = block
            .split_once(',')
            .ok_or_else(|| malformed(format!("expected destination,weight but found {:?}", block)))?;

        let destination = destination.trim();
        let index: i64 = destination
            .parse()
            .map_err(|_| malformed(format!("destination {:?} is not an integer", destination)))?;

        let weight = weight.trim();
        let weight = <W as num_traits::Num>::from_str_radix(weight, 10)
            .map_err(|_| malformed(format!("weight {:?} is not a non-negative integer", weight)))?;

        let destination = usize::try_from(index)
            .ok()
            .filter(|&index| (1..=vertex_count).contains(&index))
            .ok_or(Error::InvalidIndex {
                line: line_number,
                index,
                vertex_count,
            })?;

        edges.push(Edge::new(destination - 1, weight));
    }

    Ok(edges)
}
