// src/lib.rs
//! # Generic Collections
//!
//! Two small, independent data structures:
//!
//! - [`Set`]: an unordered set of unique keys with union, intersection,
//!   difference and equality
//! - [`CircularQueue`]: a FIFO queue stored in a ring buffer that doubles its
//!   capacity whenever an insertion finds it full
//!
//! Neither structure synchronizes internally. Wrap them in a `Mutex` to share
//! across threads.
//!
//! Elements implementing [`zeroize::Zeroize`] can be securely erased with
//! `burn()` on either structure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::missing_safety_doc)]

pub mod error;
pub mod queue;
pub mod set;

// Re-export main types
pub use error::{CollectionError, Result, ResultExt};
pub use queue::{CircularQueue, QueueConfig};
pub use set::Set;

/// Commonly used imports.
pub mod prelude {
    pub use crate::error::{CollectionError, Result, ResultExt};
    pub use crate::queue::{CircularQueue, QueueConfig};
    pub use crate::set::Set;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_set() {
        let mut s = Set::from_elems([1, 2, 3]);
        s.add(3);
        assert_eq!(s.size(), 3);
        assert!(s.union(&Set::from_elems([4])).has(&4));
    }

    #[test]
    fn test_basic_queue() {
        let mut q = CircularQueue::new(2);
        q.put("first");
        q.put("second");
        q.put("third");

        assert_eq!(q.get().unwrap(), "first");
        assert_eq!(q.to_vec(), vec!["second", "third"]);
    }

    #[test]
    fn test_set_macro() {
        let s = crate::set![1, 1, 2];
        assert_eq!(s, Set::from_elems([2, 1]));
    }

    #[test]
    fn test_collection_op_macro() {
        let mut q: CircularQueue<u8> = CircularQueue::new(1);
        let res = crate::collection_op!(q.get());
        assert_eq!(res.unwrap_err().kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
