/*!
# Bidirectional BFS

Two breadth-first searches run towards each other, one from the start and one from the goal.
The sides take turns, and each turn expands one *whole* BFS level of its side. Every node removed
from a queue is first checked against the nodes the other side has discovered; the first such node
joins the two halves.

Expanding full levels keeps the joined path as short as a single BFS would find it while each side
only explores about half the depth.
*/

use std::collections::VecDeque;

use log::{debug, trace, warn};

use super::{path::ParentTree, *};

/// One direction of the search
struct Side {
    queue: VecDeque<Node>,
    parents: ParentTree,
}

impl Side {
    fn new(n: NumNodes, root: Node) -> Self {
        let mut parents = ParentTree::new(n);
        parents.set_root(root);
        Self {
            queue: VecDeque::from(vec![root]),
            parents,
        }
    }
}

/// What a single turn of one side ended with
enum Turn {
    Met(Node),
    Continue,
    Capped,
}

/// Bidirectional breadth-first search
pub struct BidirectionalBfs<'a, G> {
    graph: &'a G,
    max_expansions: Option<usize>,
}

impl<'a, G: AdjacencyList> BidirectionalBfs<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            max_expansions: None,
        }
    }

    /// Limits the number of expansions over both sides
    pub fn set_max_expansions(&mut self, cap: usize) {
        self.max_expansions = Some(cap);
    }

    /// Limits the number of expansions over both sides
    pub fn max_expansions(mut self, cap: usize) -> Self {
        self.set_max_expansions(cap);
        self
    }

    /// Searches a path from `start` to `goal`.
    /// ** Panics if `start >= n || goal >= n` **
    pub fn run(&self, start: Node, goal: Node) -> SearchResult {
        let n = self.graph.number_of_nodes();
        let mut forward = Side::new(n, start);
        let mut backward = Side::new(n, goal);
        let mut expansions = 0;

        while !forward.queue.is_empty() && !backward.queue.is_empty() {
            for forward_turn in [true, false] {
                let (this, other) = if forward_turn {
                    (&mut forward, &backward)
                } else {
                    (&mut backward, &forward)
                };

                match self.expand_level(this, other, &mut expansions) {
                    Turn::Met(meet) => {
                        let path = Self::join(&forward, &backward, meet);
                        debug!(
                            "sides met at {meet} after {expansions} expansions, path of {} nodes",
                            path.len()
                        );
                        return SearchResult::with_path(Outcome::Found, path, expansions);
                    }
                    Turn::Continue => {}
                    Turn::Capped => {
                        warn!("bidirectional search stopped after {expansions} expansions");
                        return SearchResult::without_path(Outcome::Exhausted, expansions);
                    }
                }
            }
        }

        debug!("goal not reachable, {expansions} expansions");
        SearchResult::without_path(Outcome::NotFound, expansions)
    }

    /// Expands every node currently queued on `this` side and stops at the first node that
    /// `other` has discovered as well.
    fn expand_level(&self, this: &mut Side, other: &Side, expansions: &mut usize) -> Turn {
        for _ in 0..this.queue.len() {
            if self.max_expansions.is_some_and(|cap| *expansions >= cap) {
                return Turn::Capped;
            }

            let Some(u) = this.queue.pop_front() else {
                break;
            };
            *expansions += 1;
            trace!("expand {u} (#{expansions})");

            if other.parents.is_reached(u) {
                return Turn::Met(u);
            }

            for v in self.graph.neighbors_of(u) {
                if !this.parents.try_set_parent(v, u) {
                    this.queue.push_back(v);
                }
            }
        }

        Turn::Continue
    }

    /// Forward path to `meet` followed by the backward path from `meet` to the goal
    fn join(forward: &Side, backward: &Side, meet: Node) -> Vec<Node> {
        let mut path = forward.parents.path_to(meet);
        let mut tail = backward.parents.path_to(meet);
        tail.pop();
        path.extend(tail.into_iter().rev());
        path
    }
}

#[cfg(test)]
mod tests {
    use super::{super::fixtures::*, *};
    use crate::{labels::LabeledGraph, repr::*};

    #[test]
    fn house_path() {
        let house = house();
        let result = BidirectionalBfs::new(&house.graph).run(X, Y);
        assert_eq!(house.format_path(&result.path), "X L Y");
        // X, then Y from the other side, then K which Y has not discovered, then L
        assert_eq!(result.expansions, 4);
    }

    #[test]
    fn start_is_goal() {
        let g = AdjArrayUndir::from_edges(2, [(0, 1)]);
        let result = BidirectionalBfs::new(&g).run(1, 1);
        assert_eq!(result.path, vec![1]);
        assert_eq!(result.expansions, 1);
    }

    #[test]
    fn long_chain() {
        let g = AdjArrayUndir::from_edges(7, (0..6).map(|u| (u, u + 1)));
        let result = BidirectionalBfs::new(&g).run(0, 6);
        assert_eq!(result.path, (0..7).collect::<Vec<Node>>());
        assert!(result.is_walk_in(&g));
    }

    #[test]
    fn disconnected() {
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        let result = BidirectionalBfs::new(&g).run(0, 3);
        assert_eq!(result.outcome, Outcome::NotFound);
        assert!(result.path.is_empty());
    }

    #[test]
    fn capped() {
        let g = AdjArrayUndir::from_edges(9, (0..8).map(|u| (u, u + 1)));
        let result = BidirectionalBfs::new(&g).max_expansions(3).run(0, 8);
        assert_eq!(result.outcome, Outcome::Exhausted);
        assert_eq!(result.expansions, 3);
    }

    #[test]
    fn labeled_reverse() {
        let g = LabeledGraph::from_labeled_edges(
            [("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
            Vec::<(&str, Cost)>::new(),
        );
        let (c, a) = (g.node("c").unwrap(), g.node("a").unwrap());
        let result = BidirectionalBfs::new(&g.graph).run(c, a);
        assert_eq!(result.path_length(), 2);
        assert_eq!(result.path.first(), Some(&2));
    }
}
