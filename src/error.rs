use thiserror::Error;

/// Error types for fallible container operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Index is beyond the current container length
    #[error("index out of bounds: index {index} is beyond length {len}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        len: usize,
    },
    /// Requested capacity does not fit in a single allocation
    #[error("capacity overflow: requested {requested} elements")]
    CapacityOverflow {
        /// Number of elements requested
        requested: usize,
    },
    /// The allocator failed to provide the requested buffer
    #[error("allocation failed: {bytes} bytes")]
    AllocationFailed {
        /// Size of the failed allocation in bytes
        bytes: usize,
    },
    /// Read of a value that is not present
    #[error("value is vacant")]
    VacantValue,
    /// Lookup of a key the map does not contain
    #[error("key not found")]
    KeyNotFound,
}
