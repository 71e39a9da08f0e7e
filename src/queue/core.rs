// src/queue/core.rs
//! Core queue structure: construction, put/get, and capacity doubling.

use super::config::QueueConfig;
use super::iter::Iter;
use crate::error::{CollectionError, Result};
use std::fmt;
use zeroize::Zeroize;

/// A FIFO queue stored in a circular slot array that doubles when full.
///
/// `head` is the slot of the oldest element and `tail` the slot the next
/// element will be written to. The `size` live elements occupy
/// `head, head + 1, ...` modulo the capacity.
///
/// # Thread Safety
///
/// The queue performs no internal synchronization. Share it across threads
/// only behind a lock such as `Mutex<CircularQueue<T>>`.
///
/// # Example
///
/// ```rust
/// use gencoll::prelude::*;
///
/// let mut queue = CircularQueue::from_items(3, vec![1, 2, 3]);
/// assert!(queue.is_full());
///
/// assert_eq!(queue.get()?, 1);
/// queue.put(4);
/// queue.put(5); // grows to 6 slots
///
/// assert_eq!(queue.capacity(), 6);
/// assert_eq!(queue.to_vec(), vec![2, 3, 4, 5]);
/// assert_eq!(queue.to_string(), "queue[2 3 4 5]");
/// # Ok::<(), gencoll::CollectionError>(())
/// ```
#[derive(Clone)]
pub struct CircularQueue<T> {
    /// Slot storage; live slots are always `Some`
    pub(crate) slots: Box<[Option<T>]>,
    /// Position of the oldest element
    pub(crate) head: usize,
    /// Position where the next element lands
    pub(crate) tail: usize,
    /// Number of live elements
    pub(crate) size: usize,
    /// Whether capacity is power-of-2 (enables fast modulo)
    pub(crate) is_pow2: bool,
    /// Optional growth ceiling
    pub(crate) max_capacity: Option<usize>,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with room for `capacity` elements before the
    /// first resize. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        Self::from_vec(capacity, Vec::new())
    }

    /// Creates a queue pre-populated with `items` in FIFO order.
    ///
    /// If there are at least as many items as the requested capacity, the
    /// buffer is allocated exactly large enough and fully packed, leaving
    /// `tail` wrapped to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gencoll::CircularQueue;
    ///
    /// let queue = CircularQueue::from_items(3, [1, 2, 3, 4]);
    /// assert_eq!(queue.capacity(), 4);
    /// assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn from_items<I>(capacity: usize, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(capacity, items.into_iter().collect())
    }

    /// Creates a queue from a [`QueueConfig`] and initial contents.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CapacityExceeded` if the initial allocation
    /// would already be larger than `config.max_capacity`.
    pub fn with_config<I>(config: QueueConfig, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        if let Some(max) = config.max_capacity {
            let requested = config.initial_capacity.max(items.len()).max(1);
            if requested > max {
                return Err(CollectionError::CapacityExceeded { requested, max });
            }
        }

        let mut queue = Self::from_vec(config.initial_capacity, items);
        queue.max_capacity = config.max_capacity;
        Ok(queue)
    }

    fn from_vec(capacity: usize, items: Vec<T>) -> Self {
        let capacity = capacity.max(1);
        let size = items.len();

        let (slots, tail) = if capacity <= size {
            let slots: Box<[Option<T>]> = items.into_iter().map(Some).collect();
            (slots, 0)
        } else {
            let mut slots = empty_slots(capacity);
            for (slot, item) in slots.iter_mut().zip(items) {
                *slot = Some(item);
            }
            (slots, size)
        };

        Self {
            is_pow2: slots.len().is_power_of_two(),
            slots,
            head: 0,
            tail,
            size,
            max_capacity: None,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Alias of [`size`](Self::size) for iterator-style call sites.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of slots currently allocated.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the configured growth ceiling, if any.
    #[inline]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Returns `true` if the queue holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the next `put` will trigger a resize.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.size == self.slots.len()
    }

    /// Wraps a position around the capacity.
    ///
    /// Uses fast bitwise AND for power-of-2 capacities, standard modulo otherwise.
    #[inline(always)]
    pub(crate) fn wrap_pos(&self, pos: usize, delta: usize) -> usize {
        let new_pos = pos + delta;
        if self.is_pow2 {
            new_pos & (self.slots.len() - 1)
        } else {
            new_pos % self.slots.len()
        }
    }

    /// Appends `item` at the tail, doubling capacity first if the queue is full.
    ///
    /// # Panics
    ///
    /// Panics if the queue is full and already at its configured
    /// `max_capacity`. Use [`try_put`](Self::try_put) to handle that case.
    pub fn put(&mut self, item: T) {
        if self.is_full() {
            match self.next_capacity() {
                Ok(capacity) => self.resize(capacity),
                Err(err) => panic!("{}", err),
            }
        }
        unsafe { self.put_unchecked(item) }
    }

    /// Appends `item`, failing instead of growing past `max_capacity`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CapacityExceeded` and leaves the queue
    /// unchanged when no room can be made.
    pub fn try_put(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            let capacity = self.next_capacity()?;
            self.resize(capacity);
        }
        unsafe { self.put_unchecked(item) };
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyQueue` if there is nothing to dequeue.
    pub fn get(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(CollectionError::EmptyQueue);
        }
        Ok(unsafe { self.get_unchecked() })
    }

    /// Returns the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Returns a borrowing iterator over the elements in FIFO order.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back, self.size)
    }

    /// Returns the live region as two physical runs.
    ///
    /// The second run is empty unless the region wraps past the end of the
    /// buffer. Every slot in both runs is `Some`.
    pub(crate) fn as_slices(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.size == 0 {
            return (&[], &[]);
        }
        if self.head < self.tail {
            (&self.slots[self.head..self.tail], &[])
        } else {
            (&self.slots[self.head..], &self.slots[..self.tail])
        }
    }

    /// Drops every element and resets the indices, keeping the allocation.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }

    /// Drops every element and shrinks the buffer back to a single slot.
    pub fn free(&mut self) {
        let released = self.slots.len();
        self.slots = empty_slots(1);
        self.is_pow2 = true;
        self.head = 0;
        self.tail = 0;
        self.size = 0;
        log::debug!("queue freed, released {} slots", released);
    }

    fn next_capacity(&self) -> Result<usize> {
        let current = self.slots.len();
        let doubled = current.saturating_mul(2);
        match self.max_capacity {
            Some(max) if current >= max => Err(CollectionError::CapacityExceeded {
                requested: doubled,
                max,
            }),
            Some(max) => Ok(doubled.min(max)),
            None => Ok(doubled),
        }
    }

    /// Moves the live region into a fresh buffer of `new_capacity` slots so
    /// that it starts unwrapped at index 0.
    ///
    /// Only called on a full queue, so `head == tail` unless the region was
    /// already contiguous.
    fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.slots.len();
        let mut slots = empty_slots(new_capacity);

        if self.head < self.tail {
            let len = self.tail - self.head;
            slots[..len].swap_with_slice(&mut self.slots[self.head..self.tail]);
            log::trace!("queue resize {} -> {} (contiguous)", old_capacity, new_capacity);
        } else if self.head == 0 {
            slots[..old_capacity].swap_with_slice(&mut self.slots[..]);
            log::trace!("queue resize {} -> {} (unwrapped)", old_capacity, new_capacity);
        } else {
            let suffix = old_capacity - self.head;
            slots[..suffix].swap_with_slice(&mut self.slots[self.head..]);
            slots[suffix..suffix + self.tail].swap_with_slice(&mut self.slots[..self.tail]);
            log::trace!("queue resize {} -> {} (wrapped)", old_capacity, new_capacity);
        }

        self.slots = slots;
        self.is_pow2 = new_capacity.is_power_of_two();
        self.head = 0;
        self.tail = self.size;
    }
}

impl<T: Clone> CircularQueue<T> {
    /// Copies the elements into a new `Vec`, oldest first.
    ///
    /// The queue itself is not modified.
    pub fn to_vec(&self) -> Vec<T> {
        let (front, back) = self.as_slices();
        let mut res = Vec::with_capacity(self.size);
        res.extend(front.iter().flatten().cloned());
        res.extend(back.iter().flatten().cloned());
        res
    }
}

impl<T: Zeroize> CircularQueue<T> {
    /// Securely zeroes every element, then clears the queue.
    ///
    /// Capacity is kept; call [`free`](Self::free) afterwards to release it.
    pub fn burn(&mut self) {
        let burned = self.size;
        for item in self.slots.iter_mut().flatten() {
            item.zeroize();
        }
        self.clear();
        log::debug!("queue burned {} elements", burned);
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new(QueueConfig::default().initial_capacity)
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.put(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(0, iter)
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Renders as `queue[1 2 3]`, oldest first; an empty queue is `queue[]`.
impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
