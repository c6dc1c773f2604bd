use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Validated access past the allocated slots
    #[error("Out of range: index {index} is beyond array capacity {capacity}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Capacity of the array at the time of the access
        capacity: usize,
    },
    /// Doubling the capacity would overflow `usize`
    #[error("Capacity overflow: cannot grow beyond capacity {capacity}")]
    CapacityOverflow {
        /// Capacity that could not be doubled
        capacity: usize,
    },
    /// The allocator refused a new storage block
    #[error("Allocation failed: could not allocate {requested} slots")]
    AllocationFailed {
        /// Number of slots requested
        requested: usize,
    },
}
