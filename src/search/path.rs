/*!
# Path Reconstruction

Searches record *how* they reached a node and rebuild the start → goal sequence only once the goal
is found. Two flavours exist:

- [`ParentTree`] stores one parent per node. It suits every search that expands a node at most
  once (BFS, DFS, best-first, bidirectional halves, the random walk).
- [`PathArena`] stores one entry per *path prefix*. Beam search may reach the same node along
  different paths at the same time, so parents are kept per entry instead of per node.
*/

use itertools::Itertools;

use crate::*;

/// Parent pointers of a search tree over the nodes `0..n`.
///
/// `INVALID_NODE` marks nodes that were never reached, the root is its own parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTree {
    parents: Vec<Node>,
}

impl ParentTree {
    /// Creates a tree for `n` nodes in which no node was reached
    pub fn new(n: NumNodes) -> Self {
        Self {
            parents: vec![INVALID_NODE; n as usize],
        }
    }

    /// Marks `root` as a root of the tree
    /// ** Panics if `root >= n` **
    pub fn set_root(&mut self, root: Node) {
        self.parents[root as usize] = root;
    }

    /// Records `parent` as the parent of `u`
    /// ** Panics if `u >= n` **
    pub fn set_parent(&mut self, u: Node, parent: Node) {
        self.parents[u as usize] = parent;
    }

    /// Records the parent of `u` unless `u` was reached before.
    /// Returns *true* if `u` was reached before.
    /// ** Panics if `u >= n` **
    pub fn try_set_parent(&mut self, u: Node, parent: Node) -> bool {
        if self.is_reached(u) {
            true
        } else {
            self.set_parent(u, parent);
            false
        }
    }

    /// Returns the parent of `u`, or `None` if `u` was never reached.
    /// The root returns itself.
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        OptionalNode::new(*self.parents.get(u as usize)?).map(|p| p.get())
    }

    /// Returns *true* if `u` has been reached
    pub fn is_reached(&self, u: Node) -> bool {
        self.parent_of(u).is_some()
    }

    /// Number of nodes covered by the tree
    pub fn number_of_nodes(&self) -> NumNodes {
        self.parents.len() as NumNodes
    }

    /// Returns the path from the root to `target`.
    ///
    /// The path is empty if `target` was never reached. The walk takes at most `n` steps, so
    /// parent pointers that do not end in a root also yield an empty path.
    pub fn path_to(&self, target: Node) -> Vec<Node> {
        let mut path = Vec::new();
        let mut u = target;

        for _ in 0..self.parents.len() {
            let Some(p) = self.parent_of(u) else {
                return Vec::new();
            };
            path.push(u);
            if p == u {
                path.reverse();
                return path;
            }
            u = p;
        }

        Vec::new()
    }

    /// Iterates over all reached nodes in ascending order
    pub fn reached(&self) -> impl Iterator<Item = Node> + '_ {
        self.parents
            .iter()
            .positions(|&p| p != INVALID_NODE)
            .map(|u| u as Node)
    }
}

/// Index of an entry within a [`PathArena`]
pub type PathId = usize;

/// Arena of path prefixes.
///
/// Every entry stores its last node and the id of the prefix it extends. Extending a path is `O(1)`
/// and shares the prefix with every other extension of it.
#[derive(Debug, Clone, Default)]
pub struct PathArena {
    entries: Vec<(Node, Option<PathId>)>,
}

impl PathArena {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the single-node path `[u]`
    pub fn root(&mut self, u: Node) -> PathId {
        self.entries.push((u, None));
        self.entries.len() - 1
    }

    /// Adds the path `prefix + [u]`
    /// ** Panics if `prefix` is not an id of this arena **
    pub fn extend(&mut self, prefix: PathId, u: Node) -> PathId {
        assert!(prefix < self.entries.len());
        self.entries.push((u, Some(prefix)));
        self.entries.len() - 1
    }

    /// Returns the last node of path `id`
    /// ** Panics if `id` is not an id of this arena **
    pub fn last(&self, id: PathId) -> Node {
        self.entries[id].0
    }

    /// Iterates over the nodes of path `id` from its last node back to its root
    pub fn walk_back(&self, id: PathId) -> impl Iterator<Item = Node> + '_ {
        std::iter::successors(Some(id), move |&i| self.entries[i].1).map(move |i| self.entries[i].0)
    }

    /// Returns *true* if path `id` passes through `u`
    pub fn contains(&self, id: PathId, u: Node) -> bool {
        self.walk_back(id).any(|v| v == u)
    }

    /// Returns the nodes of path `id` from root to last node
    pub fn path(&self, id: PathId) -> Vec<Node> {
        let mut path = self.walk_back(id).collect_vec();
        path.reverse();
        path
    }

    /// Number of stored prefixes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if no prefix is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all prefixes. Previously returned ids become invalid.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_tree_paths() {
        let mut tree = ParentTree::new(5);
        tree.set_root(2);
        tree.set_parent(0, 2);
        tree.set_parent(4, 0);

        assert_eq!(tree.path_to(4), vec![2, 0, 4]);
        assert_eq!(tree.path_to(2), vec![2]);
        assert_eq!(tree.path_to(1), Vec::<Node>::new());
        assert_eq!(tree.parent_of(2), Some(2));
        assert_eq!(tree.parent_of(3), None);
        assert_eq!(tree.parent_of(9), None);
        assert_eq!(tree.reached().collect_vec(), vec![0, 2, 4]);
    }

    #[test]
    fn parent_tree_first_parent_wins() {
        let mut tree = ParentTree::new(3);
        tree.set_root(0);
        assert!(!tree.try_set_parent(1, 0));
        assert!(tree.try_set_parent(1, 2));
        assert_eq!(tree.parent_of(1), Some(0));
    }

    #[test]
    fn parent_cycle_does_not_hang() {
        let mut tree = ParentTree::new(3);
        tree.set_parent(0, 1);
        tree.set_parent(1, 2);
        tree.set_parent(2, 0);
        assert!(tree.path_to(0).is_empty());
    }

    #[test]
    fn arena_shares_prefixes() {
        let mut arena = PathArena::new();
        let root = arena.root(3);
        let a = arena.extend(root, 1);
        let b = arena.extend(root, 4);
        let c = arena.extend(a, 0);

        assert_eq!(arena.path(c), vec![3, 1, 0]);
        assert_eq!(arena.path(b), vec![3, 4]);
        assert_eq!(arena.last(b), 4);
        assert!(arena.contains(c, 3));
        assert!(!arena.contains(b, 1));
        assert_eq!(arena.len(), 4);
    }
}
