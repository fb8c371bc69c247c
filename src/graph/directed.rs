use crate::graph::traits::{Edge, Graph, Weight};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Row `v` holds the outgoing edges of vertex `v`. The graph is validated
/// once on construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex, indexed by source vertex
    adjacency: Vec<Vec<Edge<W>>>,

    /// Total number of edges across all rows
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph from ready-made adjacency rows
    ///
    /// Every destination must lie in `[0, rows)`; otherwise the offending
    /// destination is reported as [`Error::OutOfRange`].
    pub fn from_adjacency(adjacency: Vec<Vec<Edge<W>>>) -> Result<Self> {
        let vertex_count = adjacency.len();

        for edge in adjacency.iter().flatten() {
            if edge.destination() >= vertex_count {
                return Err(Error::OutOfRange {
                    vertex: edge.destination(),
                    vertex_count,
                });
            }
        }

        Ok(Self::from_checked_adjacency(adjacency))
    }

    /// Wraps rows whose destinations are already known to be in range
    pub(crate) fn from_checked_adjacency(adjacency: Vec<Vec<Edge<W>>>) -> Self {
        debug_assert!(adjacency
            .iter()
            .flatten()
            .all(|edge| edge.destination() < adjacency.len()));

        let edge_count = adjacency.iter().map(Vec::len).sum();
        DirectedGraph {
            adjacency,
            edge_count,
        }
    }

    /// Creates a graph with `vertex_count` vertices from `(from, to, weight)` triples
    ///
    /// Edges keep the order in which they are supplied within each row.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut adjacency = vec![Vec::new(); vertex_count];

        for (from, to, weight) in edges {
            let row = adjacency.get_mut(from).ok_or(Error::OutOfRange {
                vertex: from,
                vertex_count,
            })?;
            row.push(Edge::new(to, weight));
        }

        Self::from_adjacency(adjacency)
    }

    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn isolated(vertex_count: usize) -> Self {
        Self::from_checked_adjacency(vec![Vec::new(); vertex_count])
    }

    /// Iterates over `(source, edges)` rows in vertex order
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Edge<W>])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, row)| (vertex, row.as_slice()))
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges_from(&self, vertex: usize) -> Result<&[Edge<W>]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(Error::OutOfRange {
                vertex,
                vertex_count: self.adjacency.len(),
            })
    }
}
