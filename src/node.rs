/*!
# Node Representation

We choose `Node = u32` as the graphs searched here are tiny and a fixed-width integer lets us
index per-node tables (parents, heuristics, visited-bits) directly.
Labelled nodes (`'X'`, `"kitchen"`, ...) are mapped onto this range by [`crate::labels::NodeLabels`].
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Heuristic estimates and path costs. Lower means closer to the goal.
pub type Cost = i64;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_roundtrip() {
        for u in [0, 1, 7, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }
}
