// src/queue/iter.rs
//! FIFO iterators over a [`CircularQueue`].

use super::core::CircularQueue;
use std::iter::{Chain, FusedIterator};
use std::slice;

/// Borrowing iterator over a queue, oldest element first.
///
/// Walks the (at most two) physical runs of the live region.
pub struct Iter<'a, T> {
    runs: Chain<slice::Iter<'a, Option<T>>, slice::Iter<'a, Option<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(front: &'a [Option<T>], back: &'a [Option<T>], len: usize) -> Self {
        Self {
            runs: front.iter().chain(back.iter()),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.runs.next()?.as_ref()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues elements in FIFO order.
pub struct IntoIter<T> {
    queue: CircularQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.get().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.size(), Some(self.queue.size()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_wrapped() {
        let mut q = CircularQueue::from_items(4, vec![1, 2, 3, 4]);
        q.get().unwrap();
        q.get().unwrap();
        q.put(5);

        let iter = q.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_iter_empty() {
        let q: CircularQueue<u32> = CircularQueue::new(4);
        assert_eq!(q.iter().next(), None);
    }

    #[test]
    fn test_into_iter_drains_in_order() {
        let q: CircularQueue<_> = (1..=5).collect();
        let mut total = 0;
        for (expected, item) in (1..=5).zip(&q) {
            assert_eq!(expected, *item);
            total += 1;
        }
        assert_eq!(total, 5);
        assert_eq!(q.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
