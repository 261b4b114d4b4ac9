/*!
# Heuristics

Informed searches (best-first, beam, hill climbing) order their candidates by an estimate of the
remaining distance to the goal. Lower values are better; the goal itself usually carries `0`.

A heuristic is kept apart from the graph: the same graph can be searched with different estimates
and uninformed searches never need one. Every informed driver checks that *all* nodes carry an
estimate before it starts and fails with [`SearchError::MissingHeuristic`] otherwise.
*/

use itertools::Itertools;

use crate::{error::SearchError, *};

/// Maps nodes to their estimated distance to the goal.
pub trait Heuristic {
    /// Returns the estimate of `u`, or `None` if none was set.
    fn estimate(&self, u: Node) -> Option<Cost>;

    /// Returns the first node in `0..n` without an estimate
    fn first_missing(&self, n: NumNodes) -> Option<Node> {
        (0..n).find(|&u| self.estimate(u).is_none())
    }

    /// Ensures every node in `0..n` carries an estimate
    fn check_complete(&self, n: NumNodes) -> Result<(), SearchError> {
        match self.first_missing(n) {
            Some(u) => Err(SearchError::MissingHeuristic(u)),
            None => Ok(()),
        }
    }

    /// Returns the estimate of `u`; unset estimates rank behind every set one.
    fn cost_of(&self, u: Node) -> Cost {
        self.estimate(u).unwrap_or(Cost::MAX)
    }
}

impl Heuristic for [Cost] {
    fn estimate(&self, u: Node) -> Option<Cost> {
        self.get(u as usize).copied()
    }
}

impl Heuristic for Vec<Cost> {
    fn estimate(&self, u: Node) -> Option<Cost> {
        self.as_slice().estimate(u)
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, u: Node) -> Option<Cost> {
        (**self).estimate(u)
    }
}

/// Dense table of optional per-node estimates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeHeuristics(Vec<Option<Cost>>);

impl NodeHeuristics {
    /// Creates a table for `n` nodes with no estimate set
    pub fn new(n: NumNodes) -> Self {
        Self(vec![None; n as usize])
    }

    /// Creates a complete table from one estimate per node
    pub fn from_values<I: IntoIterator<Item = Cost>>(values: I) -> Self {
        Self(values.into_iter().map(Some).collect_vec())
    }

    /// Sets the estimate of `u` and returns the previous one.
    /// ** Panics if `u >= n` **
    pub fn set(&mut self, u: Node, h: Cost) -> Option<Cost> {
        self.0[u as usize].replace(h)
    }

    /// Number of nodes covered by the table
    pub fn number_of_nodes(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Iterates over `(node, estimate)` for all nodes with an estimate
    pub fn iter(&self) -> impl Iterator<Item = (Node, Cost)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(u, h)| h.map(|h| (u as Node, h)))
    }
}

impl Heuristic for NodeHeuristics {
    fn estimate(&self, u: Node) -> Option<Cost> {
        self.0.get(u as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_set_and_missing() {
        let mut h = NodeHeuristics::new(3);
        assert_eq!(h.first_missing(3), Some(0));
        assert_eq!(h.set(0, 5), None);
        assert_eq!(h.set(0, 4), Some(5));
        h.set(2, 0);
        assert_eq!(
            h.check_complete(3),
            Err(SearchError::MissingHeuristic(1))
        );
        h.set(1, 2);
        assert!(h.check_complete(3).is_ok());
        assert_eq!(h.iter().collect_vec(), vec![(0, 4), (1, 2), (2, 0)]);
    }

    #[test]
    fn slice_heuristic() {
        let h: Vec<Cost> = vec![3, 1];
        assert_eq!(h.estimate(1), Some(1));
        assert_eq!(h.estimate(2), None);
        assert_eq!(h.cost_of(2), Cost::MAX);
        assert_eq!(h.first_missing(3), Some(2));
    }
}
