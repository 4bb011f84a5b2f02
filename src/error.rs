use thiserror::Error;

/// Error types for `DynList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynListError {
    /// Index is outside the range accepted by the operation
    #[error("Index out of bounds: index {index} is out of range for list of length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the list
        length: usize,
    },
    /// Requested initial capacity cannot be allocated
    #[error("Invalid capacity: requested {requested}, but at most {max} is allowed")]
    InvalidCapacity {
        /// Capacity that was requested, as the caller's signed value
        requested: i128,
        /// Largest capacity that may be requested
        max: usize,
    },
}
