/*!
# Frontiers

The frontier (OPEN list) holds the discovered but not yet expanded entries of a search. Its
removal rule is the only thing that distinguishes most classic searches from one another:

- [`Vec`] -> stack semantics -> **DFS**
- [`VecDeque`] -> queue semantics -> **BFS**
- [`BestFirstFrontier`] -> smallest heuristic first, FIFO on ties -> **best-first search**
- [`RandomFrontier`] -> uniformly random entry -> **random OPEN-list search**
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use rand::Rng;

use crate::{heuristic::Heuristic, *};

/// Abstraction for items stored in a frontier.
///
/// A `SequencedItem` encodes both the **node to be expanded**
/// and an **optional predecessor** that represents its parent
/// in the search tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without a predecessor (a root).
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)`.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
/// This is unambiguous for search trees since no node discovers itself.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Container of entries waiting to be expanded.
pub trait Frontier<T> {
    /// Inserts an entry.
    fn push(&mut self, item: T);

    /// Removes and returns the next entry according to the frontier's removal rule.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of entries currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Returns *true* if no entry is left.
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    /// Drops all entries.
    fn clear(&mut self);
}

impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

/// Priority frontier returning the entry with the smallest estimate first.
///
/// Entries with equal estimates leave in insertion order, so that the adjacency order of the
/// graph decides ties. Candidates are never discarded.
pub struct BestFirstFrontier<'h, H: ?Sized> {
    heuristic: &'h H,
    heap: BinaryHeap<Reverse<(Cost, u64, Node, Node)>>,
    sequence: u64,
}

impl<'h, H: Heuristic + ?Sized> BestFirstFrontier<'h, H> {
    /// Creates an empty frontier ordered by `heuristic`
    pub fn new(heuristic: &'h H) -> Self {
        Self {
            heuristic,
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<H: Heuristic + ?Sized> Frontier<PredecessorOfNode> for BestFirstFrontier<'_, H> {
    fn push(&mut self, (p, u): PredecessorOfNode) {
        let h = self.heuristic.cost_of(u);
        self.heap.push(Reverse((h, self.sequence, p, u)));
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<PredecessorOfNode> {
        self.heap.pop().map(|Reverse((_, _, p, u))| (p, u))
    }

    fn cardinality(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Frontier that removes an entry at a uniformly random position.
///
/// The random source is injected so that runs are reproducible with a seeded generator.
pub struct RandomFrontier<T, R> {
    items: Vec<T>,
    rng: R,
}

impl<T, R: Rng> RandomFrontier<T, R> {
    /// Creates an empty frontier drawing from `rng`
    pub fn new(rng: R) -> Self {
        Self {
            items: Vec::new(),
            rng,
        }
    }

    /// Returns the random source, e.g. to continue a seeded sequence
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<T, R: Rng> Frontier<T> for RandomFrontier<T, R> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..self.items.len());
        Some(self.items.remove(idx))
    }

    fn cardinality(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn drain<T, F: Frontier<T>>(mut frontier: F) -> Vec<T> {
        std::iter::from_fn(|| frontier.pop()).collect_vec()
    }

    #[test]
    fn stack_and_queue() {
        let mut stack = Vec::new();
        let mut queue = VecDeque::new();
        for u in 0..4 as Node {
            Frontier::push(&mut stack, u);
            Frontier::push(&mut queue, u);
        }
        assert_eq!(Frontier::cardinality(&stack), 4);
        assert_eq!(drain(stack), vec![3, 2, 1, 0]);
        assert_eq!(drain(queue), vec![0, 1, 2, 3]);
    }

    #[test]
    fn best_first_breaks_ties_fifo() {
        let h: Vec<Cost> = vec![5, 1, 3, 1, 0];
        let mut frontier = BestFirstFrontier::new(&h);
        for u in [0, 3, 2, 1, 4] {
            frontier.push((0, u));
        }
        assert_eq!(
            drain(frontier).into_iter().map(|(_, u)| u).collect_vec(),
            vec![4, 3, 1, 2, 0]
        );
    }

    #[test]
    fn best_first_ranks_missing_estimates_last() {
        let h: Vec<Cost> = vec![7];
        let mut frontier = BestFirstFrontier::new(h.as_slice());
        frontier.push((0, 3));
        frontier.push((0, 0));
        assert_eq!(frontier.pop(), Some((0, 0)));
        assert_eq!(frontier.pop(), Some((0, 3)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn random_frontier_returns_every_item_once() {
        let mut frontier = RandomFrontier::new(Pcg64Mcg::seed_from_u64(7));
        for u in 0..20 as Node {
            frontier.push(u);
        }
        let order = drain(frontier);
        assert_eq!(order.len(), 20);
        assert_eq!(order.iter().copied().sorted().collect_vec(), (0..20).collect_vec());
    }

    #[test]
    fn random_frontier_is_reproducible() {
        let run = |seed| {
            let mut frontier = RandomFrontier::new(Pcg64Mcg::seed_from_u64(seed));
            frontier.push((0 as Node, 1 as Node));
            frontier.push((0, 2));
            frontier.push((1, 3));
            drain(frontier)
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn predecessor_items() {
        let root = PredecessorOfNode::new_without_predecessor(4);
        assert_eq!(root.predecessor(), None);
        assert_eq!(root.item(), 4);
        let item = PredecessorOfNode::new_with_predecessor(4, 2);
        assert_eq!(item.predecessor(), Some(4));
        assert_eq!(Node::new_with_predecessor(4, 2).predecessor(), None);
    }
}
