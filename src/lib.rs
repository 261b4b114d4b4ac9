/*!
`graph-search` is a library of classic state-space searches on small undirected graphs:
- **uninformed**: BFS, DFS, bidirectional BFS and the exhaustive *British Museum* enumeration,
- **informed**: best-first, beam search and hill climbing guided by a per-node heuristic,
- **randomized**: searches that remove a random entry from their frontier.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Graphs are undirected and
unweighted; see the [`repr`] module for the available storage backends.

Graphs whose nodes carry names (`X`, `K`, `kitchen`) are handled by [`labels::LabeledGraph`], which
maps labels to nodes and keeps the heuristic estimate of every node. Such graphs are usually read
from text with the [`io`] module.

# Design

All searches share one frontier-parameterized engine ([`search::FrontierSearch`]): BFS, DFS,
best-first and random-order search differ only in the frontier they pop from. Searches that do not
fit that shape (bidirectional, beam, hill climbing, path enumeration, random walk) are separate
drivers. Every driver is a configurable struct that one can alter using either the *Builder* or
*Setter* pattern before running it. The common cases are also implemented via the
[`search::GraphSearch`] trait on the graph itself.

Every driver reports a [`search::SearchResult`]: the outcome, the path and the number of expanded
nodes. Failing to reach the goal is an outcome; errors are reserved for invalid input.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, all representations and the search entry points,
- [`search`] includes the search drivers and their building blocks (frontiers, parent trees, path arenas),
- [`heuristic`] includes the [`heuristic::Heuristic`] trait and a per-node table,
- [`io`] includes a reader and writer for labelled graphs with heuristic estimates,
- [`search::report`] runs a suite of searches on one problem and writes a transcript.

In most use-cases, `use graph_search::prelude::*;` suffices for your needs.

```
use graph_search::prelude::*;

let g = LabeledGraph::from_labeled_edges(
    [("X", "K"), ("X", "L"), ("K", "Y"), ("L", "Y")],
    [("X", 2), ("K", 1), ("L", 3), ("Y", 0)],
);
let (x, y) = (g.node("X").unwrap(), g.node("Y").unwrap());

let res = g.graph.best_first_search(x, y, &g.heuristics).unwrap();
assert_eq!(g.format_path(&res.path), "X K Y");
```
*/

pub mod edge;
pub mod error;
pub mod heuristic;
pub mod io;
pub mod labels;
pub mod node;
pub mod ops;
pub mod repr;
pub mod search;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `graph_search::prelude` includes definitions for nodes and edges, all basic graph operation
/// traits, all implemented representations as well as the search entry points.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, LoadError, SearchError},
        heuristic::{Heuristic, NodeHeuristics},
        io::{HeuristicListRead, HeuristicListWrite},
        labels::{LabeledGraph, NodeLabels},
        node::*,
        ops::*,
        repr::*,
        search::{GraphSearch, Outcome, SearchResult},
    };
}
