/*!
# Representations

Graphs are stored as one [`Neighborhood`] per node. The choice of neighborhood decides the order
in which a search sees the neighbors of a node, which in turn decides tie-breaking:

- [`AdjArrayUndir`]: `Vec<Node>` per node, neighbors in insertion order, parallel edges are kept.
- [`AdjMatrixUndir`]: one bitset row per node, neighbors in ascending order, parallel edges collapse.

In addition, [`Tree`] is an arena-backed rooted tree whose children are exposed as neighbors so
that the same search drivers run on it.
*/

use crate::{ops::*, *};

mod neighborhood;
mod tree;
mod undirected;

pub use neighborhood::*;
pub use tree::*;
pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `u` is in the Neighborhood
    /// ** Might panic if `u >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges.
    /// Returns *true* if the Neighborhood grew.
    fn add_neighbor(&mut self, u: Node) -> bool;
}
