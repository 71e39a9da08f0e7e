// src/queue/mod.rs
//! Self-growing FIFO queue backed by a circular buffer.
//!
//! The queue keeps its live elements in a fixed-length slot array indexed
//! modulo the capacity. When an insertion hits a full buffer, capacity
//! doubles and the live region is relocated so that the oldest element sits
//! at physical index 0.

mod config;
mod core;
mod iter;
mod unchecked;

pub use config::QueueConfig;
pub use self::core::CircularQueue;
pub use iter::{IntoIter, Iter};
