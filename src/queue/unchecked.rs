// src/queue/unchecked.rs
//! Unchecked (unsafe) queue operations for hot paths

use super::core::CircularQueue;

impl<T> CircularQueue<T> {
    /// Removes and returns the oldest element without checking for emptiness.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `!self.is_empty()`.
    #[inline]
    pub unsafe fn get_unchecked(&mut self) -> T {
        debug_assert!(self.size > 0, "get_unchecked: queue is empty");

        let slot = unsafe { self.slots.get_unchecked_mut(self.head) };
        let item = unsafe { slot.take().unwrap_unchecked() };
        self.head = self.wrap_pos(self.head, 1);
        self.size -= 1;
        item
    }

    /// Writes `item` at the tail without checking for free space.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `!self.is_full()`.
    #[inline]
    pub unsafe fn put_unchecked(&mut self, item: T) {
        debug_assert!(
            self.size < self.slots.len(),
            "put_unchecked: size {} == capacity {}",
            self.size,
            self.slots.len()
        );

        let slot = unsafe { self.slots.get_unchecked_mut(self.tail) };
        *slot = Some(item);
        self.tail = self.wrap_pos(self.tail, 1);
        self.size += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_roundtrip() {
        let mut q = CircularQueue::new(2);
        unsafe {
            q.put_unchecked(10);
            q.put_unchecked(20);
        }
        assert!(q.is_full());
        assert_eq!(q.tail, 0);

        assert_eq!(unsafe { q.get_unchecked() }, 10);
        assert_eq!(unsafe { q.get_unchecked() }, 20);
        assert!(q.is_empty());
        assert_eq!(q.head, 0);
    }
}
