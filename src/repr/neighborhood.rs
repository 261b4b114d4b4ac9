use std::{iter::Copied, slice::Iter};

use stream_bitset::prelude::{
    BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream,
};

use super::*;

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) -> bool {
        self.0.push(u);
        true
    }
}

/// A Neighborhood represented by a NodeBitSet, i.e. one row of an adjacency matrix
#[derive(Default, Clone)]
pub struct BitNeighborhood(pub NodeBitSet);

impl Neighborhood for BitNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(NodeBitSet::new(n))
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.cardinality()
    }

    type NeighborhoodIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, Node, true>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        // `self.0.iter_set_bits()` is a wrapper with an opaque type so it does not work here
        self.0.bitmask_stream().iter_set_bits()
    }

    fn has_neighbor(&self, u: Node) -> bool {
        self.0.get_bit(u)
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        self.0.set_bit(u)
    }

    fn add_neighbor(&mut self, u: Node) -> bool {
        !self.0.set_bit(u)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn array_keeps_insertion_order_and_duplicates() {
        let mut nbs = ArrNeighborhood::new(5);
        assert!(nbs.add_neighbor(3));
        assert!(nbs.add_neighbor(1));
        assert!(nbs.add_neighbor(3));
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 3]);
        assert_eq!(nbs.num_of_neighbors(), 3);
        assert!(nbs.try_add_neighbor(1));
        assert!(!nbs.try_add_neighbor(4));
        assert_eq!(nbs.num_of_neighbors(), 4);
    }

    #[test]
    fn bitset_is_sorted_and_deduplicated() {
        let mut nbs = BitNeighborhood::new(5);
        assert!(nbs.add_neighbor(3));
        assert!(nbs.add_neighbor(1));
        assert!(!nbs.add_neighbor(3));
        assert_eq!(nbs.neighbors().collect_vec(), vec![1, 3]);
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert!(nbs.has_neighbor(1));
        assert!(!nbs.has_neighbor(0));
    }
}
