use std::fmt::Debug;

use smallvec::SmallVec;

use super::*;
use crate::{
    error::{GraphError, check_node},
    search::{Bfs, Dfs, SequencedItem},
};

/// Rooted tree stored in an arena.
///
/// Tree nodes are addressed by their index, the root being [`Tree::ROOT`]. Indices are assigned in
/// insertion order and stay valid since nodes are never removed. The tree implements
/// [`AdjacencyList`] with the children of a node as its neighbors, so every search in
/// [`crate::search`] runs on it from the root downwards.
#[derive(Clone)]
pub struct Tree<T> {
    values: Vec<T>,
    parents: Vec<Node>,
    children: Vec<SmallVec<[Node; 4]>>,
}

impl<T> Tree<T> {
    /// Index of the root node
    pub const ROOT: Node = 0;

    /// Creates a tree consisting only of a root carrying `value`
    pub fn new(value: T) -> Self {
        Self {
            values: vec![value],
            parents: vec![Self::ROOT],
            children: vec![SmallVec::new()],
        }
    }

    /// Adds a child carrying `value` below `parent` and returns its index
    pub fn add_child(&mut self, parent: Node, value: T) -> Result<Node, GraphError> {
        check_node(parent, self.number_of_nodes())?;

        let u = self.values.len() as Node;
        self.values.push(value);
        self.parents.push(parent);
        self.children.push(SmallVec::new());
        self.children[parent as usize].push(u);
        Ok(u)
    }

    /// Returns the value of `u`, or `None` if `u` is not a node of the tree
    pub fn value_of(&self, u: Node) -> Option<&T> {
        self.values.get(u as usize)
    }

    /// Returns the parent of `u`. The root and invalid nodes have none.
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        if u == Self::ROOT {
            return None;
        }
        self.parents.get(u as usize).copied()
    }

    /// Returns the children of `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn children_of(&self, u: Node) -> &[Node] {
        &self.children[u as usize]
    }

    /// Returns *true* if `u` has no children
    /// ** Panics if `u >= n` **
    pub fn is_leaf(&self, u: Node) -> bool {
        self.children[u as usize].is_empty()
    }

    /// Returns the nodes from the root down to `u`
    /// ** Panics if `u >= n` **
    pub fn path_from_root(&self, u: Node) -> Vec<Node> {
        let mut path = vec![u];
        let mut v = u;
        while let Some(p) = self.parent_of(v) {
            path.push(p);
            v = p;
        }
        path.reverse();
        path
    }

    /// Number of edges between the root and `u`
    /// ** Panics if `u >= n` **
    pub fn depth_of(&self, u: Node) -> usize {
        self.path_from_root(u).len() - 1
    }

    /// Iterates over all values in index order
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }

    /// Searches the tree depth-first from the root and returns the first node whose value
    /// satisfies `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<Node>
    where
        P: FnMut(&T) -> bool,
    {
        Dfs::new(self, Self::ROOT)
            .run_until(|u| predicate(&self.values[u as usize]))
            .path
            .last()
            .copied()
    }
}

impl Tree<Node> {
    /// Builds the breadth-first spanning tree of the component of `root`.
    ///
    /// Every tree node carries the graph node it stands for. Children keep the adjacency order of
    /// the graph.
    pub fn spanning_tree<G: AdjacencyList>(graph: &G, root: Node) -> Result<Self, GraphError> {
        graph.check_node(root)?;

        let mut tree = Tree::new(root);
        let mut tree_node = vec![INVALID_NODE; graph.len()];
        tree_node[root as usize] = Self::ROOT;

        for item in Bfs::new(graph, root) {
            if let Some(p) = item.predecessor() {
                tree_node[item.item() as usize] = tree.add_child(tree_node[p as usize], item.item())?;
            }
        }

        Ok(tree)
    }
}

impl<T> GraphNodeOrder for Tree<T> {
    fn number_of_nodes(&self) -> NumNodes {
        self.values.len() as NumNodes
    }
}

impl<T> GraphEdgeOrder for Tree<T> {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_nodes() - 1
    }
}

impl<T> AdjacencyList for Tree<T> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.children[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.children[u as usize].len() as NumNodes
    }
}

impl<T> AdjacencyTest for Tree<T> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.children[u as usize].contains(&v)
    }
}

impl<T: Debug> Debug for Tree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.vertices()
                    .map(|u| (&self.values[u as usize], self.children_of(u))),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::search::GraphSearch;

    /// The ten-node graph of `a`..`j`, a tree rooted at `a`
    fn lab_graph() -> AdjArrayUndir {
        AdjArrayUndir::from_edges(
            10,
            [
                (0, 1),
                (0, 2),
                (1, 3),
                (1, 4),
                (2, 5),
                (2, 6),
                (3, 7),
                (3, 8),
                (8, 9),
            ],
        )
    }

    #[test]
    fn build_by_hand() {
        let mut tree = Tree::new("root");
        let a = tree.add_child(Tree::<&str>::ROOT, "a").unwrap();
        let b = tree.add_child(Tree::<&str>::ROOT, "b").unwrap();
        let c = tree.add_child(a, "c").unwrap();

        assert_eq!(tree.number_of_nodes(), 4);
        assert_eq!(tree.number_of_edges(), 3);
        assert_eq!(tree.children_of(0), &[a, b]);
        assert_eq!(tree.parent_of(c), Some(a));
        assert_eq!(tree.parent_of(0), None);
        assert_eq!(tree.value_of(c), Some(&"c"));
        assert_eq!(tree.value_of(9), None);
        assert_eq!(tree.path_from_root(c), vec![0, a, c]);
        assert_eq!(tree.depth_of(c), 2);
        assert!(tree.is_leaf(b));
        assert_eq!(
            tree.add_child(7, "x"),
            Err(GraphError::NodeOutOfRange { node: 7, n: 4 })
        );
    }

    #[test]
    fn spanning_tree_of_lab_graph() {
        let g = lab_graph();
        let tree = Tree::spanning_tree(&g, 0).unwrap();

        assert_eq!(tree.number_of_nodes(), 10);
        assert_eq!(tree.values().copied().collect_vec(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(tree.children_of(3), &[7, 8]);
        assert_eq!(tree.depth_of(9), 4);
    }

    #[test]
    fn spanning_tree_drops_cycle_edges() {
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
        let tree = Tree::spanning_tree(&g, 2).unwrap();
        assert_eq!(tree.number_of_edges(), 3);
        assert_eq!(tree.value_of(Tree::<Node>::ROOT), Some(&2));
        assert!(Tree::spanning_tree(&g, 4).is_err());
    }

    #[test]
    fn find_values() {
        let g = lab_graph();
        let tree = Tree::spanning_tree(&g, 0).unwrap();

        let found = tree.find(|&v| v == 9).unwrap();
        assert_eq!(tree.value_of(found), Some(&9));
        assert_eq!(
            tree.path_from_root(found)
                .into_iter()
                .map(|u| tree.value_of(u).copied().unwrap())
                .collect_vec(),
            vec![0, 1, 3, 8, 9]
        );
        assert_eq!(tree.find(|&v| v > 100), None);
    }

    #[test]
    fn searches_run_on_trees() {
        let mut tree = Tree::new('a');
        let b = tree.add_child(0, 'b').unwrap();
        let c = tree.add_child(b, 'c').unwrap();
        tree.add_child(0, 'd').unwrap();

        let res = tree.bfs_search(0, c).unwrap();
        assert_eq!(res.path, vec![0, b, c]);
        // edges only lead away from the root
        assert!(!tree.bfs_search(c, 0).unwrap().found());
        assert_eq!(format!("{tree:?}"), "{'a': [1, 3], 'b': [2], 'c': [], 'd': []}");
    }
}
