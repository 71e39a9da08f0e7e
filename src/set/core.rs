// src/set/core.rs
//! Core set structure and membership operations

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use zeroize::Zeroize;

/// An unordered set of unique keys backed by a hash table.
///
/// Iteration order is unspecified and may differ between calls on the same
/// set; compare sets with [`equal`](Set::equal), never by sequence.
///
/// # Thread Safety
///
/// No internal synchronization. Concurrent mutation requires an external lock.
///
/// # Examples
///
/// ```
/// use gencoll::Set;
///
/// let mut s = Set::from_elems([1, 2, 2, 3]);
/// assert_eq!(s.size(), 3);
///
/// s.add(4);
/// s.delete(&1);
/// assert!(s.has(&4));
/// assert!(!s.has(&1));
/// ```
#[derive(Clone)]
pub struct Set<K> {
    pub(crate) items: HashSet<K>,
}

impl<K> Set<K> {
    /// Returns the number of elements in the set.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, K> {
        self.items.iter()
    }
}

impl<K: Eq + Hash> Set<K> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Creates a set from initial elements. Duplicates collapse to one entry.
    pub fn from_elems<I>(elems: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            items: elems.into_iter().collect(),
        }
    }

    /// Reports whether `k` is in the set.
    #[inline]
    pub fn has<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains(k)
    }

    /// Adds `k`. Adding an element that is already present does nothing.
    #[inline]
    pub fn add(&mut self, k: K) {
        self.items.insert(k);
    }

    /// Adds every element of `elems`.
    pub fn add_all<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.items.extend(elems);
    }

    /// Removes `k` if present.
    ///
    /// Does not report whether `k` was in the set; call [`has`](Self::has)
    /// first if that matters.
    #[inline]
    pub fn delete<Q>(&mut self, k: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.remove(k);
    }

    /// Releases spare hash table capacity.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }
}

impl<K: Eq + Hash + Clone> Set<K> {
    /// Returns an independent copy of the set.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Collects the elements into a new `Vec` in unspecified order.
    pub fn to_vec(&self) -> Vec<K> {
        self.items.iter().cloned().collect()
    }
}

impl<K: Zeroize> Set<K> {
    /// Drains the set, securely zeroing every element before it is dropped.
    pub fn burn(&mut self) {
        let burned = self.items.len();
        for mut k in self.items.drain() {
            k.zeroize();
        }
        log::debug!("set burned {} elements", burned);
    }
}

impl<K: Eq + Hash> Default for Set<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Set<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_elems(iter)
    }
}

impl<K: Eq + Hash, const N: usize> From<[K; N]> for Set<K> {
    fn from(elems: [K; N]) -> Self {
        Self::from_elems(elems)
    }
}

impl<K: Eq + Hash> Extend<K> for Set<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<K> IntoIterator for Set<K> {
    type Item = K;
    type IntoIter = hash_set::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Set<K> {
    type Item = &'a K;
    type IntoIter = hash_set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: fmt::Debug> fmt::Debug for Set<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

/// Renders as `set[1 2 3]` with elements in unspecified order; an empty
/// set is `set[]`.
impl<K: fmt::Display> fmt::Display for Set<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set[")?;
        for (i, k) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", k)?;
        }
        write!(f, "]")
    }
}
