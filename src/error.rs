// src/error.rs
//! Error types for collection operations with conversion support

use std::fmt;

/// Errors that can occur during collection operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Dequeue attempted on an empty queue
    EmptyQueue,
    /// Queue growth would exceed the configured maximum capacity
    CapacityExceeded {
        /// Capacity the queue would have needed
        requested: usize,
        /// Configured upper bound
        max: usize,
    },
    /// Foreign error converted from `anyhow::Error`.
    ///
    /// Never produced by a collection operation; only by the `anyhow` conversion.
    InvalidState(String),
    /// Foreign error converted from `std::io::Error`.
    ///
    /// Never produced by a collection operation; only by the io conversion.
    Io(String),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQueue => write!(f, "Queue is empty"),
            Self::CapacityExceeded { requested, max } => write!(
                f,
                "Queue capacity {} exceeds configured maximum {}",
                requested, max
            ),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for CollectionError {}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

/// Convert CollectionError to std::io::Error
impl From<CollectionError> for std::io::Error {
    fn from(err: CollectionError) -> Self {
        use std::io::ErrorKind;
        match err {
            CollectionError::EmptyQueue => std::io::Error::new(ErrorKind::UnexpectedEof, err),
            CollectionError::CapacityExceeded { .. } => {
                std::io::Error::new(ErrorKind::WriteZero, err)
            }
            CollectionError::Io(msg) => std::io::Error::other(msg),
            _ => std::io::Error::other(err),
        }
    }
}

/// Convert std::io::Error to CollectionError
impl From<std::io::Error> for CollectionError {
    fn from(err: std::io::Error) -> Self {
        CollectionError::Io(err.to_string())
    }
}

// CollectionError -> anyhow::Error comes from anyhow's blanket impl over
// `std::error::Error + Send + Sync + 'static`.

/// Allow using ? with anyhow::Error
#[cfg(feature = "anyhow")]
impl From<anyhow::Error> for CollectionError {
    fn from(err: anyhow::Error) -> Self {
        CollectionError::InvalidState(err.to_string())
    }
}

// ============================================================================
// RESULT TYPE ALIASES
// ============================================================================

/// Result type alias for collection operations
///
/// Note: When mixing with other Result types (like anyhow::Result),
/// either qualify the type (`gencoll::Result<T>`) or use [`ResultExt`].
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}

/// Converts a collection operation's error into another error type.
///
/// The two-argument form names the target type explicitly, which is needed
/// for targets such as `anyhow::Error` that have overlapping `From` impls.
///
/// # Example
/// ```
/// use gencoll::prelude::*;
/// use gencoll::collection_op;
///
/// fn drain_one(q: &mut CircularQueue<u32>) -> std::io::Result<u32> {
///     collection_op!(q.get())
/// }
///
/// let mut q = CircularQueue::from_items(2, vec![7]);
/// assert_eq!(drain_one(&mut q).unwrap(), 7);
/// assert!(drain_one(&mut q).is_err());
/// ```
#[macro_export]
macro_rules! collection_op {
    ($expr:expr, $target:ty) => {
        $expr.map_err(|e: $crate::CollectionError| -> $target { e.into() })
    };
    ($expr:expr) => {
        $expr.map_err(|e: $crate::CollectionError| -> std::io::Error { e.into() })
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_maps_to_eof() {
        let io_err: std::io::Error = CollectionError::EmptyQueue.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_capacity_exceeded_display() {
        let err = CollectionError::CapacityExceeded {
            requested: 8,
            max: 4,
        };
        assert_eq!(
            err.to_string(),
            "Queue capacity 8 exceeds configured maximum 4"
        );
        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::WriteZero);
    }

    #[test]
    fn test_io_roundtrip_keeps_message() {
        let io_err = std::io::Error::other("disk on fire");
        let err: CollectionError = io_err.into();
        assert_eq!(err, CollectionError::Io("disk on fire".to_string()));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<u32> = Ok(42);
        assert_eq!(result.into_io().unwrap(), 42);

        let result: Result<u32> = Err(CollectionError::EmptyQueue);
        assert!(result.into_io().is_err());
    }

    #[cfg(feature = "anyhow")]
    #[test]
    fn test_anyhow_conversion() {
        let err: anyhow::Error = CollectionError::EmptyQueue.into();
        assert!(err.to_string().contains("empty"));

        let result: Result<u32> = Err(CollectionError::EmptyQueue);
        assert!(result.into_anyhow().is_err());

        let back: CollectionError = anyhow::anyhow!("upstream failure").into();
        assert_eq!(back, CollectionError::InvalidState("upstream failure".to_string()));
    }
}
