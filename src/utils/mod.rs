/*!
# Utilities

Abstractions over the per-search bookkeeping:
- [`Set`] generalizes the visited/closed set so that searches can pick a dense bitset (the
  default) or a hash set (`FxHashSet<Node>`) for sparse exploration of large id ranges,
- [`FromCapacity`] lets a search allocate that set without knowing its concrete type.
*/

use std::{collections::HashSet, hash::BuildHasher};

use crate::node::{Node, NodeBitSet};

pub mod set;

pub use set::Set;

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for NodeBitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using a bitset as a Set requires intializing to the maximum element
        Self::new(total as Node)
    }
}

impl<T, S> FromCapacity for HashSet<T, S>
where
    S: BuildHasher + Default,
{
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        // Using `HashSet<T>` as a Set only requires intializing to the number of elements
        Self::with_capacity_and_hasher(used, S::default())
    }
}
