use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Edge weight: a finite, non-negative integer
///
/// Negative weights cannot be represented, so every graph built over a
/// `Weight` satisfies the non-negativity assumption Dijkstra relies on.
pub trait Weight: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

/// An outgoing edge stored in its source vertex's adjacency row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    destination: usize,
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// Creates an edge towards `destination` (0-based) with the given weight
    pub fn new(destination: usize, weight: W) -> Self {
        Edge { destination, weight }
    }

    /// Returns the 0-based destination vertex
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// Trait representing an immutable weighted directed graph
///
/// Implementors are read-only: nothing in the shortest path strategies may
/// mutate a graph, which is why they can share one across threads.
pub trait Graph<W>: Debug + Sync
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in insertion order
    ///
    /// Fails with [`crate::Error::OutOfRange`] when `vertex` is not a valid index.
    fn edges_from(&self, vertex: usize) -> Result<&[Edge<W>]>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
