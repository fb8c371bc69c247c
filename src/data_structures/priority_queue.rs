use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-first priority queue of `(vertex, snapshot)` entries
///
/// Entries are snapshots taken at insertion time: the queue never looks at a
/// live distance array and has no decrease-key. Pushing the same vertex again
/// leaves the older entry in place, so callers must tolerate stale pops.
///
/// Entries with equal snapshots pop in ascending vertex order. That order
/// comes from the underlying `BinaryHeap` comparing `(priority, vertex)` pairs
/// and is an implementation detail, not a guarantee callers may rely on.
#[derive(Debug)]
pub struct SnapshotQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> SnapshotQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        SnapshotQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a snapshot of `vertex` at `priority`
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest snapshot
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> FromIterator<(V, P)> for SnapshotQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn from_iter<I: IntoIterator<Item = (V, P)>>(iter: I) -> Self {
        SnapshotQueue {
            heap: iter
                .into_iter()
                .map(|(vertex, priority)| Reverse((priority, vertex)))
                .collect(),
        }
    }
}
