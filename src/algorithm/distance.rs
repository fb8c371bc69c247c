use std::fmt;

use crate::graph::{Edge, Weight};
use crate::{Error, Result};

/// Tentative distance from the source: a finite weight or infinity
///
/// Ordering puts every `Finite` value below `Infinite`, which lets queues key
/// on a `Distance` directly even for vertices that are not reached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    /// Distance of the source to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    /// Returns true if a path has been found
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    /// Extends this distance by one edge
    ///
    /// Infinity stays infinite. A sum that overflows `W` is treated as
    /// infinite too, so it can never win a relaxation.
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Finite(value) => num_traits::CheckedAdd::checked_add(&value, &weight)
                .map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<W: Weight> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Infinite => f.write_str("Infinity"),
        }
    }
}

/// Fresh distance array: zero at `source`, infinite everywhere else
pub(crate) fn initial_distances<W: Weight>(vertex_count: usize, source: usize) -> Vec<Distance<W>> {
    let mut distances = vec![Distance::Infinite; vertex_count];
    distances[source] = Distance::zero();
    distances
}

/// Relaxes `edge` out of `from` against the live distance array
///
/// Returns the new distance of the destination when it strictly improved,
/// `None` otherwise. A distance is only ever lowered, never raised, and an
/// already optimal destination is left untouched.
pub(crate) fn relax<W: Weight>(
    distances: &mut [Distance<W>],
    from: usize,
    edge: &Edge<W>,
) -> Result<Option<Distance<W>>> {
    let vertex_count = distances.len();
    let candidate = distances
        .get(from)
        .ok_or(Error::OutOfRange { vertex: from, vertex_count })?
        .extend(edge.weight());

    let target = distances
        .get_mut(edge.destination())
        .ok_or(Error::OutOfRange {
            vertex: edge.destination(),
            vertex_count,
        })?;

    if candidate < *target {
        *target = candidate;
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_orders_below_infinite() {
        assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(3u32) < Distance::Finite(4u32));
    }

    #[test]
    fn extend_saturates_to_infinite() {
        assert_eq!(Distance::Finite(250u8).extend(10), Distance::Infinite);
        assert_eq!(Distance::<u8>::Infinite.extend(0), Distance::Infinite);
        assert_eq!(Distance::Finite(2u8).extend(3), Distance::Finite(5));
    }

    #[test]
    fn relax_only_lowers_distances() {
        let mut distances = vec![Distance::Finite(0u64), Distance::Finite(4), Distance::Infinite];

        assert_eq!(relax(&mut distances, 0, &Edge::new(1, 3)).unwrap(), Some(Distance::Finite(3)));
        // a longer path leaves the destination alone
        assert_eq!(relax(&mut distances, 0, &Edge::new(1, 9)).unwrap(), None);
        assert_eq!(distances[1], Distance::Finite(3));
    }

    #[test]
    fn relax_is_idempotent_once_optimal() {
        let mut distances = vec![Distance::Finite(0u64), Distance::Finite(1)];
        let edge = Edge::new(1, 1);

        assert_eq!(relax(&mut distances, 0, &edge).unwrap(), None);
        assert_eq!(relax(&mut distances, 0, &edge).unwrap(), None);
        assert_eq!(distances, vec![Distance::Finite(0), Distance::Finite(1)]);
    }

    #[test]
    fn relax_from_unreached_vertex_does_nothing() {
        let mut distances = vec![Distance::Finite(0u64), Distance::Infinite, Distance::Infinite];

        assert_eq!(relax(&mut distances, 1, &Edge::new(2, 0)).unwrap(), None);
        assert_eq!(distances[2], Distance::Infinite);
    }

    #[test]
    fn relax_rejects_dangling_destination() {
        let mut distances = vec![Distance::Finite(0u64)];
        let err = relax(&mut distances, 0, &Edge::new(5, 1)).unwrap_err();

        assert!(matches!(err, Error::OutOfRange { vertex: 5, vertex_count: 1 }));
    }
}
