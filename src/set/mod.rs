// src/set/mod.rs
//! Unordered collection of unique elements with set algebra.

mod core;
mod ops;

pub use self::core::Set;

/// Builds a [`Set`] from a list of elements; duplicates collapse.
///
/// # Example
///
/// ```
/// use gencoll::set;
///
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.size(), 3);
///
/// let empty: gencoll::Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Set::from_elems([$($elem),+])
    };
}
