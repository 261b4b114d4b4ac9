/*!
# Frontier Search

[`FrontierSearch`] is the single OPEN/CLOSED loop behind BFS, DFS, best-first and the random
OPEN-list search. It is parameterized by

- the frontier `F` deciding which entry is expanded next (see [`super::frontier`]),
- the visited set `V` (any [`Set<Node>`]; a bitset by default),
- the [`VisitMarking`] deciding *when* a node counts as visited.

It can be consumed as an iterator over expanded `(predecessor, node)` pairs or driven to a goal
with [`FrontierSearch::run`] and [`FrontierSearch::run_until`].
*/

use std::collections::VecDeque;

use log::{debug, trace, warn};

use super::{
    frontier::{BestFirstFrontier, Frontier, PredecessorOfNode, RandomFrontier, SequencedItem},
    path::ParentTree,
    *,
};
use crate::{
    ops::*,
    utils::{FromCapacity, Set},
};

/// When a node is marked as visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitMarking {
    /// Mark a node when it is inserted into the frontier.
    /// Every node enters the frontier at most once.
    #[default]
    OnInsert,
    /// Mark a node when it is removed from the frontier.
    /// A node may sit in the frontier several times; later copies are skipped.
    /// With a stack this yields true depth-first preorder.
    OnExpand,
}

/// Generic OPEN/CLOSED search.
pub struct FrontierSearch<'a, G, F, V = NodeBitSet>
where
    G: AdjacencyList,
    F: Frontier<PredecessorOfNode>,
    V: Set<Node>,
{
    graph: &'a G,
    frontier: F,
    visited: V,
    parents: ParentTree,
    marking: VisitMarking,
    stop_at: Option<Node>,
    max_expansions: Option<usize>,
    expansions: usize,
    hit_cap: bool,
}

/// A breadth-first search using a queue (`VecDeque`).
pub type Bfs<'a, G> = FrontierSearch<'a, G, VecDeque<PredecessorOfNode>>;

/// A depth-first search using a stack (`Vec`).
pub type Dfs<'a, G> = FrontierSearch<'a, G, Vec<PredecessorOfNode>>;

/// A greedy best-first search ordered by a heuristic.
pub type BestFirst<'a, 'h, G, H> = FrontierSearch<'a, G, BestFirstFrontier<'h, H>>;

/// A search expanding a uniformly random frontier entry.
pub type RandomOrder<'a, G, R> = FrontierSearch<'a, G, RandomFrontier<PredecessorOfNode, R>>;

impl<'a, G, F, V> FrontierSearch<'a, G, F, V>
where
    G: AdjacencyList,
    F: Frontier<PredecessorOfNode>,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new search starting from `start`. Entries already in `frontier` are dropped.
    /// ** Panics if `start >= n` **
    pub fn with_frontier(graph: &'a G, start: Node, mut frontier: F) -> Self {
        assert!(start < graph.number_of_nodes());
        let len = graph.len();

        frontier.clear();
        frontier.push(PredecessorOfNode::new_without_predecessor(start));

        Self {
            graph,
            frontier,
            visited: V::from_total_used_capacity(len, len),
            parents: ParentTree::new(graph.number_of_nodes()),
            marking: VisitMarking::default(),
            stop_at: None,
            max_expansions: None,
            expansions: 0,
            hit_cap: false,
        }
    }
}

impl<'a, G, F, V> FrontierSearch<'a, G, F, V>
where
    G: AdjacencyList,
    F: Frontier<PredecessorOfNode> + Default,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new search starting from `start` with an empty default frontier.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::with_frontier(graph, start, F::default())
    }
}

impl<G, F, V> FrontierSearch<'_, G, F, V>
where
    G: AdjacencyList,
    F: Frontier<PredecessorOfNode>,
    V: Set<Node>,
{
    /// Sets when nodes are marked as visited. Must be called before the first expansion.
    pub fn set_marking(&mut self, marking: VisitMarking) {
        debug_assert_eq!(self.expansions, 0);
        self.marking = marking;
    }

    /// Sets when nodes are marked as visited. Must be called before the first expansion.
    pub fn marking(mut self, marking: VisitMarking) -> Self {
        self.set_marking(marking);
        self
    }

    /// Limits the number of expansions. Once reached the search stops and reports
    /// [`Outcome::Exhausted`] if entries were left.
    pub fn set_max_expansions(&mut self, cap: usize) {
        self.max_expansions = Some(cap);
    }

    /// Limits the number of expansions. Once reached the search stops and reports
    /// [`Outcome::Exhausted`] if entries were left.
    pub fn max_expansions(mut self, cap: usize) -> Self {
        self.set_max_expansions(cap);
        self
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already in the frontier. It is therefore
    /// highly recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Excludes a node from the search. See [`FrontierSearch::exclude_node`].
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Number of nodes expanded so far
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Returns *true* if the search stopped because of the expansion cap
    pub fn hit_expansion_cap(&self) -> bool {
        self.hit_cap
    }

    /// Parent pointers of all nodes expanded so far
    pub fn parents(&self) -> &ParentTree {
        &self.parents
    }

    /// Returns *true* if `u` is marked as visited
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(&u)
    }

    /// Removes entries until one can be expanded, expands it and reports whether it is a goal.
    /// A goal is returned without inserting its neighbors and ends the search.
    fn advance<P>(&mut self, is_goal: &mut P) -> Option<(PredecessorOfNode, bool)>
    where
        P: FnMut(Node) -> bool,
    {
        loop {
            if self.max_expansions.is_some_and(|cap| self.expansions >= cap) {
                // under `OnExpand` the frontier may only hold stale entries
                while let Some(item) = self.frontier.pop() {
                    if self.marking == VisitMarking::OnInsert
                        || !self.visited.contains(&item.item())
                    {
                        self.hit_cap = true;
                    }
                }
                return None;
            }

            let item = self.frontier.pop()?;
            let u = item.item();

            // with `OnInsert` only the root is unmarked at this point
            if self.visited.insert(u) && self.marking == VisitMarking::OnExpand {
                trace!("skip stale entry {u}");
                continue;
            }

            self.parents.set_parent(u, item.predecessor().unwrap_or(u));
            self.expansions += 1;
            trace!("expand {u} (#{})", self.expansions);

            if is_goal(u) {
                self.frontier.clear();
                return Some((item, true));
            }

            for v in self.graph.neighbors_of(u) {
                let unseen = match self.marking {
                    VisitMarking::OnInsert => !self.visited.insert(v),
                    VisitMarking::OnExpand => !self.visited.contains(&v),
                };
                if unseen {
                    self.frontier
                        .push(PredecessorOfNode::new_with_predecessor(u, v));
                }
            }

            return Some((item, false));
        }
    }

    /// Runs the search until `goal` is expanded.
    pub fn run(self, goal: Node) -> SearchResult {
        self.run_until(|u| u == goal)
    }

    /// Runs the search until a node satisfying `is_goal` is expanded.
    pub fn run_until<P>(mut self, mut is_goal: P) -> SearchResult
    where
        P: FnMut(Node) -> bool,
    {
        while let Some((item, found)) = self.advance(&mut is_goal) {
            if found {
                let path = self.parents.path_to(item.item());
                debug!(
                    "goal {} found after {} expansions",
                    item.item(),
                    self.expansions
                );
                return SearchResult::with_path(Outcome::Found, path, self.expansions);
            }
        }

        if self.hit_cap {
            warn!(
                "search stopped after reaching the expansion cap of {}",
                self.expansions
            );
            SearchResult::without_path(Outcome::Exhausted, self.expansions)
        } else {
            debug!("goal not reachable, {} expansions", self.expansions);
            SearchResult::without_path(Outcome::NotFound, self.expansions)
        }
    }
}

impl<G, F, V> Iterator for FrontierSearch<'_, G, F, V>
where
    G: AdjacencyList,
    F: Frontier<PredecessorOfNode>,
    V: Set<Node>,
{
    type Item = PredecessorOfNode;

    fn next(&mut self) -> Option<Self::Item> {
        let stop_at = self.stop_at;
        self.advance(&mut |u| Some(u) == stop_at)
            .map(|(item, _)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.graph.len().saturating_sub(self.expansions)))
    }
}
