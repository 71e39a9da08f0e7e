// src/queue/config.rs
//! Construction settings for [`CircularQueue`](super::CircularQueue).

/// Default number of slots allocated up front.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Configuration for queue sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Slots allocated at construction (0 is treated as 1)
    pub initial_capacity: usize,
    /// Upper bound for growth; `None` means the queue may double without limit
    pub max_capacity: Option<usize>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_capacity: None,
        }
    }
}

impl QueueConfig {
    /// Creates an unbounded configuration with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: None,
        }
    }

    /// Caps growth at `max` slots.
    pub fn with_max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = QueueConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.max_capacity, None);
    }

    #[test]
    fn test_builder() {
        let config = QueueConfig::new(4).with_max_capacity(32);
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_capacity, Some(32));
    }
}
