// src/set/ops.rs
//! Set algebra: equality, containment, union, intersection, difference.
//!
//! Every binary operation allocates a new set and leaves both operands
//! untouched.

use super::core::Set;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

impl<K: Eq + Hash> Set<K> {
    /// Reports whether both sets hold exactly the same elements.
    ///
    /// Sizes must match and each set must contain every element of the other.
    pub fn equal(&self, other: &Self) -> bool {
        self.size() == other.size() && self.is_subset(other) && other.is_subset(self)
    }

    /// Reports whether every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|k| other.has(k))
    }

    /// Reports whether every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<K: Eq + Hash + Clone> Set<K> {
    /// Returns the elements found in either set.
    pub fn union(&self, other: &Self) -> Self {
        let mut res = Self::new();
        res.add_all(self.iter().cloned());
        res.add_all(other.iter().cloned());
        res
    }

    /// Returns the elements found in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate the smaller operand, probe the larger.
        let (small, large) = if self.size() > other.size() {
            (other, self)
        } else {
            (self, other)
        };
        small.iter().filter(|k| large.has(*k)).cloned().collect()
    }

    /// Returns the elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|k| !other.has(*k)).cloned().collect()
    }

    /// Returns the elements found in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut res = self.difference(other);
        res.add_all(other.iter().filter(|k| !self.has(*k)).cloned());
        res
    }
}

impl<K: Eq + Hash> PartialEq for Set<K> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<K: Eq + Hash> Eq for Set<K> {}

impl<K: Eq + Hash + Clone> BitOr<&Set<K>> for &Set<K> {
    type Output = Set<K>;

    fn bitor(self, rhs: &Set<K>) -> Set<K> {
        self.union(rhs)
    }
}

impl<K: Eq + Hash + Clone> BitAnd<&Set<K>> for &Set<K> {
    type Output = Set<K>;

    fn bitand(self, rhs: &Set<K>) -> Set<K> {
        self.intersection(rhs)
    }
}

impl<K: Eq + Hash + Clone> Sub<&Set<K>> for &Set<K> {
    type Output = Set<K>;

    fn sub(self, rhs: &Set<K>) -> Set<K> {
        self.difference(rhs)
    }
}

impl<K: Eq + Hash + Clone> BitXor<&Set<K>> for &Set<K> {
    type Output = Set<K>;

    fn bitxor(self, rhs: &Set<K>) -> Set<K> {
        self.symmetric_difference(rhs)
    }
}
