/*!
# Generalized Sets

Searches track visited nodes through the minimal [`Set`] trait so that the storage can be chosen
per use case:
- Dense node ranges -> `NodeBitSet` (default everywhere)
- Sparse exploration -> `HashSet` / `FxHashSet`
*/

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::node::*;

/// Minimalist trait for a set-like collection.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl Set<Node> for NodeBitSet {
    fn insert(&mut self, value: Node) -> bool {
        self.set_bit(value)
    }

    fn remove(&mut self, value: &Node) -> bool {
        self.clear_bit(*value)
    }

    fn contains(&self, value: &Node) -> bool {
        self.get_bit(*value)
    }

    fn clear(&mut self) {
        self.clear_all();
    }

    fn len(&self) -> usize {
        self.cardinality() as usize
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::*;
    use crate::utils::FromCapacity;

    fn exercise<S: Set<Node> + FromCapacity>() {
        let mut set = S::from_capacity(10);
        assert!(set.is_empty());
        assert!(!set.insert(3));
        assert!(set.insert(3));
        assert!(!set.insert(9));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&9));
        assert!(set.remove(&9));
        assert!(!set.remove(&9));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn bitset() {
        exercise::<NodeBitSet>();
    }

    #[test]
    fn hashsets() {
        exercise::<HashSet<Node>>();
        exercise::<FxHashSet<Node>>();
    }
}
