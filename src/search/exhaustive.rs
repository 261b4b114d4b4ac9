/*!
# British Museum Search

Exhaustive enumeration of every simple path (no repeated node) between two nodes.

[`SimplePaths`] is a depth-first enumeration with an explicit stack of frames instead of recursion,
so deep graphs cannot overflow the call stack. Each frame stores the deduplicated neighbors of its
node; parallel edges therefore never yield the same path twice. Paths are produced lazily in
depth-first order following the adjacency order of the graph.

The number of simple paths grows exponentially with the graph. Use
[`SimplePaths::max_expansions`] to bound the work on anything but small graphs.
*/

use itertools::Itertools;
use log::{debug, warn};
use smallvec::SmallVec;

use super::*;

/// One node of the current path together with the neighbors still to try
struct Frame {
    node: Node,
    neighbors: SmallVec<[Node; 8]>,
    next: usize,
}

/// Iterator over all simple paths from a start to a goal node
pub struct SimplePaths<'a, G> {
    graph: &'a G,
    goal: Node,
    root: Option<Node>,
    stack: Vec<Frame>,
    on_path: NodeBitSet,
    expansions: usize,
    max_expansions: Option<usize>,
    hit_cap: bool,
}

impl<'a, G: AdjacencyList> SimplePaths<'a, G> {
    /// Enumerates the simple paths from `start` to `goal`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node, goal: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        Self {
            graph,
            goal,
            root: Some(start),
            stack: Vec::new(),
            on_path: graph.vertex_bitset_unset(),
            expansions: 0,
            max_expansions: None,
            hit_cap: false,
        }
    }

    /// Stops the enumeration after `cap` nodes were put on the current path
    pub fn set_max_expansions(&mut self, cap: usize) {
        self.max_expansions = Some(cap);
    }

    /// Stops the enumeration after `cap` nodes were put on the current path
    pub fn max_expansions(mut self, cap: usize) -> Self {
        self.set_max_expansions(cap);
        self
    }

    /// Number of nodes put on the current path so far, the goal included
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Returns *true* if the enumeration was cut short by the expansion cap
    pub fn hit_expansion_cap(&self) -> bool {
        self.hit_cap
    }

    fn push_frame(&mut self, u: Node) {
        self.on_path.set_bit(u);
        self.stack.push(Frame {
            node: u,
            neighbors: self.graph.neighbors_of(u).unique().collect(),
            next: 0,
        });
    }

    /// Current path followed by `last`
    fn current_path_with(&self, last: Node) -> Vec<Node> {
        self.stack
            .iter()
            .map(|frame| frame.node)
            .chain(std::iter::once(last))
            .collect_vec()
    }

    /// Counts an expansion; returns *false* if the cap does not allow it
    fn try_expand(&mut self) -> bool {
        if self.max_expansions.is_some_and(|cap| self.expansions >= cap) {
            warn!(
                "path enumeration stopped after {} expansions",
                self.expansions
            );
            self.hit_cap = true;
            self.stack.clear();
            return false;
        }
        self.expansions += 1;
        true
    }
}

impl<G: AdjacencyList> Iterator for SimplePaths<'_, G> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.root.take() {
            if !self.try_expand() {
                return None;
            }
            if start == self.goal {
                return Some(vec![start]);
            }
            self.push_frame(start);
        }

        while let Some(frame) = self.stack.last_mut() {
            let Some(&v) = frame.neighbors.get(frame.next) else {
                let u = frame.node;
                self.on_path.clear_bit(u);
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            if self.on_path.get_bit(v) {
                continue;
            }
            if !self.try_expand() {
                return None;
            }

            if v == self.goal {
                let path = self.current_path_with(v);
                debug!("simple path of {} nodes", path.len());
                return Some(path);
            }
            self.push_frame(v);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{super::fixtures::*, *};
    use crate::repr::*;

    #[test]
    fn house_paths_each_once() {
        let house = house();
        let paths = SimplePaths::new(&house.graph, X, Y)
            .map(|p| house.format_path(&p))
            .collect_vec();

        assert_eq!(
            paths,
            vec![
                "X K L B Y",
                "X K L Y",
                "X K B L Y",
                "X K B Y",
                "X L K B Y",
                "X L B Y",
                "X L Y",
            ]
        );
        assert!(paths.iter().all_unique());
    }

    #[test]
    fn reverse_direction_finds_reversed_paths() {
        let house = house();
        let forward = SimplePaths::new(&house.graph, X, Y)
            .sorted()
            .collect_vec();
        let reverse = SimplePaths::new(&house.graph, Y, X)
            .map(|mut p| {
                p.reverse();
                p
            })
            .sorted()
            .collect_vec();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn parallel_edges_and_loops() {
        let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 0), (1, 1), (1, 2), (0, 2)]);
        let paths = SimplePaths::new(&g, 0, 2).collect_vec();
        assert_eq!(paths, vec![vec![0, 1, 2], vec![0, 2]]);
    }

    #[test]
    fn trivial_and_unreachable() {
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(SimplePaths::new(&g, 1, 1).collect_vec(), vec![vec![1]]);
        assert_eq!(SimplePaths::new(&g, 0, 3).count(), 0);
    }

    #[test]
    fn complete_graph_count() {
        // K_5: 1 + 3 + 3*2 + 3*2*1 = 16 paths between two fixed nodes
        let g = AdjMatrixUndir::from_edges(
            5,
            (0..5).tuple_combinations().map(|(u, v): (Node, Node)| (u, v)),
        );
        assert_eq!(SimplePaths::new(&g, 0, 4).count(), 16);
    }

    #[test]
    fn capped_enumeration() {
        let house = house();
        let mut paths = SimplePaths::new(&house.graph, X, Y).max_expansions(5);
        assert_eq!(paths.next().map(|p| p.len()), Some(5));
        assert_eq!(paths.next(), None);
        assert!(paths.hit_expansion_cap());
    }
}
