/*!
# Search

Uninformed and informed searches from a start node to a goal:

| Search                | Driver                                   | Frontier / rule                          |
|-----------------------|------------------------------------------|------------------------------------------|
| BFS                   | [`engine::Bfs`]                          | FIFO queue                               |
| DFS                   | [`engine::Dfs`]                          | LIFO stack                               |
| Best-first            | [`engine::BestFirst`]                    | smallest estimate, FIFO on ties          |
| Random OPEN-list      | [`engine::RandomOrder`]                  | uniformly random entry                   |
| Bidirectional BFS     | [`bidirectional::BidirectionalBfs`]      | two queues, one level per turn           |
| Beam                  | [`beam::BeamSearch`]                     | best `W` candidates per level            |
| Hill climbing         | [`hill_climbing::HillClimbing`]          | strictly improving neighbor, no backtrack|
| British Museum        | [`exhaustive::SimplePaths`]              | every simple path                        |
| Random walk           | [`random_walk::RandomWalk`]              | random entry, loops counted              |

Every driver reports a [`SearchResult`]. Not reaching the goal is an [`Outcome`], not an error;
errors ([`SearchError`]) are reserved for invalid input and are raised before a search starts.

The [`GraphSearch`] extension trait exposes the common cases directly on every graph:

```
use graph_search::prelude::*;

let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (0, 3), (3, 2)]);
let res = g.bfs_search(0, 2).unwrap();
assert_eq!(res.path, vec![0, 1, 2]);
assert_eq!(res.outcome, Outcome::Found);
```
*/

use std::fmt::{Display, Formatter};

use rand::Rng;

use crate::{error::SearchError, heuristic::Heuristic, ops::*, *};

pub mod beam;
pub mod bidirectional;
pub mod engine;
pub mod exhaustive;
pub mod frontier;
pub mod hill_climbing;
pub mod path;
pub mod random_walk;
pub mod report;

pub use beam::BeamSearch;
pub use bidirectional::BidirectionalBfs;
pub use engine::{BestFirst, Bfs, Dfs, FrontierSearch, RandomOrder, VisitMarking};
pub use exhaustive::SimplePaths;
pub use frontier::{BestFirstFrontier, Frontier, PredecessorOfNode, RandomFrontier, SequencedItem};
pub use hill_climbing::HillClimbing;
pub use path::{ParentTree, PathArena};
pub use random_walk::{LoopPolicy, RandomWalk, WalkResult};

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The goal was reached; the result carries a start → goal path.
    Found,
    /// Every reachable candidate was examined without reaching the goal.
    NotFound,
    /// Hill climbing stopped at a node without an improving neighbor.
    LocalOptimum,
    /// The random walk ran into a node it had already walked through.
    LoopDetected,
    /// The expansion or step cap was reached before the search finished.
    Exhausted,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::Found => "found",
            Outcome::NotFound => "not found",
            Outcome::LocalOptimum => "stuck at local optimum",
            Outcome::LoopDetected => "loop detected",
            Outcome::Exhausted => "expansion limit reached",
        };
        write!(f, "{text}")
    }
}

/// Result of a single search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    /// start → goal for [`Outcome::Found`], the walk up to the optimum for
    /// [`Outcome::LocalOptimum`], empty otherwise
    pub path: Vec<Node>,
    /// Number of nodes expanded, the goal included
    pub expansions: usize,
}

impl SearchResult {
    pub fn with_path(outcome: Outcome, path: Vec<Node>, expansions: usize) -> Self {
        Self {
            outcome,
            path,
            expansions,
        }
    }

    pub fn without_path(outcome: Outcome, expansions: usize) -> Self {
        Self::with_path(outcome, Vec::new(), expansions)
    }

    /// Returns *true* if the goal was reached
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Number of edges on the reported path
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns *true* if consecutive nodes of the reported path are adjacent in `graph`
    pub fn is_walk_in<G: AdjacencyTest>(&self, graph: &G) -> bool {
        self.path.windows(2).all(|w| graph.has_edge(w[0], w[1]))
    }
}

/// Provides the searches as methods on every graph.
///
/// All methods validate `start` and `goal` (and, for informed searches, the heuristic) before
/// searching and return an error instead of panicking on invalid input.
pub trait GraphSearch: AdjacencyList + Sized {
    /// Ensures `start` and `goal` are nodes of the graph
    fn check_endpoints(&self, start: Node, goal: Node) -> Result<(), SearchError> {
        self.check_node(start)?;
        self.check_node(goal)?;
        Ok(())
    }

    /// Ensures the endpoints are valid and `heuristic` covers every node
    fn check_informed<H>(&self, start: Node, goal: Node, heuristic: &H) -> Result<(), SearchError>
    where
        H: Heuristic + ?Sized,
    {
        self.check_endpoints(start, goal)?;
        heuristic.check_complete(self.number_of_nodes())
    }

    /// Breadth-first search. The path found has the minimal number of edges.
    fn bfs_search(&self, start: Node, goal: Node) -> Result<SearchResult, SearchError> {
        self.check_endpoints(start, goal)?;
        Ok(Bfs::new(self, start).run(goal))
    }

    /// Depth-first search marking nodes when they are inserted into the stack.
    fn dfs_search(&self, start: Node, goal: Node) -> Result<SearchResult, SearchError> {
        self.check_endpoints(start, goal)?;
        Ok(Dfs::new(self, start).run(goal))
    }

    /// Bidirectional BFS
    fn bidirectional_search(&self, start: Node, goal: Node) -> Result<SearchResult, SearchError> {
        self.check_endpoints(start, goal)?;
        Ok(BidirectionalBfs::new(self).run(start, goal))
    }

    /// Greedy best-first search ordered by `heuristic`
    fn best_first_search<H>(
        &self,
        start: Node,
        goal: Node,
        heuristic: &H,
    ) -> Result<SearchResult, SearchError>
    where
        H: Heuristic + ?Sized,
    {
        self.check_informed(start, goal, heuristic)?;
        Ok(
            FrontierSearch::<_, _>::with_frontier(self, start, BestFirstFrontier::new(heuristic))
                .run(goal),
        )
    }

    /// Beam search keeping the `width` best candidates per level
    fn beam_search<H>(
        &self,
        start: Node,
        goal: Node,
        heuristic: &H,
        width: usize,
    ) -> Result<SearchResult, SearchError>
    where
        H: Heuristic + ?Sized,
    {
        let beam = BeamSearch::new(width)?;
        self.check_informed(start, goal, heuristic)?;
        Ok(beam.run(self, heuristic, start, goal))
    }

    /// Steepest-descent hill climbing without backtracking
    fn hill_climbing<H>(
        &self,
        start: Node,
        goal: Node,
        heuristic: &H,
    ) -> Result<SearchResult, SearchError>
    where
        H: Heuristic + ?Sized,
    {
        self.check_informed(start, goal, heuristic)?;
        Ok(HillClimbing::new().run(self, heuristic, start, goal))
    }

    /// Lazily enumerates every simple path from `start` to `goal`
    fn simple_paths(&self, start: Node, goal: Node) -> Result<SimplePaths<'_, Self>, SearchError> {
        self.check_endpoints(start, goal)?;
        Ok(SimplePaths::new(self, start, goal))
    }

    /// British Museum search: every simple path from `start` to `goal`, each as its own result.
    /// The expansion count of a result covers the enumeration up to that path.
    fn british_museum(&self, start: Node, goal: Node) -> Result<Vec<SearchResult>, SearchError> {
        let mut paths = self.simple_paths(start, goal)?;
        let mut results = Vec::new();
        while let Some(path) = paths.next() {
            results.push(SearchResult::with_path(
                Outcome::Found,
                path,
                paths.expansions(),
            ));
        }
        Ok(results)
    }

    /// Random OPEN-list walk drawing from `rng` with the default loop policy and step cap
    fn random_walk<R: Rng>(
        &self,
        start: Node,
        goal: Node,
        rng: R,
    ) -> Result<WalkResult, SearchError> {
        self.check_endpoints(start, goal)?;
        Ok(RandomWalk::new(rng).run(self, start, goal))
    }
}

impl<G> GraphSearch for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::{labels::LabeledGraph, *};

    /// Rooms of a small house; `Y` is the usual goal.
    ///
    /// ```text
    /// X:[K,L]  K:[X,L,B]  L:[X,K,B,Y]  B:[K,L,Y]  Y:[L,B]
    /// ```
    pub(crate) fn house() -> LabeledGraph {
        LabeledGraph::from_labeled_edges(
            [
                ("X", "K"),
                ("X", "L"),
                ("K", "L"),
                ("K", "B"),
                ("L", "B"),
                ("L", "Y"),
                ("B", "Y"),
            ],
            [("X", 3), ("K", 2), ("L", 1), ("B", 1), ("Y", 0)],
        )
    }

    /// Nodes of `house()` by label
    pub(crate) const X: Node = 0;
    pub(crate) const K: Node = 1;
    pub(crate) const L: Node = 2;
    pub(crate) const B: Node = 3;
    pub(crate) const Y: Node = 4;
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::{fixtures::*, *};
    use crate::{error::GraphError, heuristic::NodeHeuristics, repr::*};

    #[test]
    fn outcome_text() {
        assert_eq!(Outcome::LocalOptimum.to_string(), "stuck at local optimum");
        assert_eq!(Outcome::NotFound.to_string(), "not found");
    }

    #[test]
    fn invalid_endpoints_are_errors() {
        let g = house().graph;
        assert_eq!(
            g.bfs_search(X, 9),
            Err(SearchError::Graph(GraphError::NodeOutOfRange { node: 9, n: 5 }))
        );
        assert!(g.dfs_search(7, Y).is_err());
        assert!(g.bidirectional_search(5, Y).is_err());
        assert!(g.simple_paths(X, 5).is_err());
        assert!(g.random_walk(X, 5, Pcg64Mcg::seed_from_u64(0)).is_err());
    }

    #[test]
    fn informed_searches_need_complete_heuristic() {
        let g = house().graph;
        let mut h = NodeHeuristics::new(5);
        h.set(X, 1);
        assert_eq!(
            g.best_first_search(X, Y, &h),
            Err(SearchError::MissingHeuristic(K))
        );
        assert_eq!(g.hill_climbing(X, Y, &h), Err(SearchError::MissingHeuristic(K)));
        assert_eq!(g.beam_search(X, Y, &h, 0), Err(SearchError::ZeroBeamWidth));
    }

    #[test]
    fn house_paths() {
        let house = house();
        let (g, h) = (&house.graph, &house.heuristics);

        let bfs = g.bfs_search(X, Y).unwrap();
        assert_eq!(house.format_path(&bfs.path), "X L Y");

        let dfs = g.dfs_search(X, Y).unwrap();
        assert!(dfs.found() && dfs.is_walk_in(g));
        assert_eq!(dfs.path.first(), Some(&X));
        assert_eq!(dfs.path.last(), Some(&Y));

        let bidir = g.bidirectional_search(X, Y).unwrap();
        assert_eq!(bidir.path_length(), bfs.path_length());

        let best = g.best_first_search(X, Y, h).unwrap();
        assert_eq!(house.format_path(&best.path), "X L Y");

        let hill = g.hill_climbing(X, Y, h).unwrap();
        assert_eq!(hill.outcome, Outcome::Found);
        assert_eq!(house.format_path(&hill.path), "X L Y");

        let beam = g.beam_search(X, Y, h, 2).unwrap();
        assert!(beam.found() && beam.is_walk_in(g));

        let museum = g.british_museum(X, Y).unwrap();
        assert_eq!(museum.len(), 7);
        assert!(museum.iter().all(|r| r.found() && r.is_walk_in(g)));
    }

    #[test]
    fn reverse_direction() {
        let house = house();
        let g = &house.graph;
        let forward = g.bfs_search(X, Y).unwrap();
        let reverse = g.bfs_search(Y, X).unwrap();
        assert_eq!(forward.path_length(), reverse.path_length());
        assert_eq!(reverse.path.first(), Some(&Y));
    }

    #[test]
    fn bfs_is_shortest_on_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for n in [4 as NumNodes, 7, 10] {
            for _ in 0..20 {
                let edges = (0..n + n / 2)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec();
                let g = AdjArrayUndir::from_edges(n, edges);
                let (s, t) = (rng.random_range(0..n), rng.random_range(0..n));

                let bfs = g.bfs_search(s, t).unwrap();
                let dfs = g.dfs_search(s, t).unwrap();
                let bidir = g.bidirectional_search(s, t).unwrap();
                assert_eq!(bfs.found(), dfs.found());
                assert_eq!(bfs.found(), bidir.found());

                if bfs.found() {
                    assert!(bfs.is_walk_in(&g) && dfs.is_walk_in(&g) && bidir.is_walk_in(&g));
                    assert!(dfs.path_length() >= bfs.path_length());
                    assert_eq!(bidir.path_length(), bfs.path_length());

                    // no simple path is shorter than the BFS path
                    let shortest = g
                        .simple_paths(s, t)
                        .unwrap()
                        .map(|p| p.len() - 1)
                        .min();
                    assert_eq!(shortest, Some(bfs.path_length()));
                }
            }
        }
    }
}
