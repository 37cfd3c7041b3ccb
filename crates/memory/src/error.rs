//! Allocation error types
//!
//! Exactly two conditions are surfaced as runtime errors: a request that
//! does not fit above the stack marker, and a free with a pointer that does
//! not resolve into the owned region. Contract violations (non-power-of-two
//! alignment, alignment outside `[1, 128]`, freeing an in-range pointer
//! that was never returned by the instance) are debug assertions, not
//! recoverable errors.

use thiserror::Error;

/// Result type for allocation operations
pub type AllocResult<T> = Result<T, AllocError>;

/// Errors surfaced by the fixed-region allocators
///
/// [`CapacityExceeded`](AllocError::CapacityExceeded) is always recoverable:
/// the region never grows, so the caller shrinks the request, rewinds, or
/// goes elsewhere. [`InvalidPointer`](AllocError::InvalidPointer) indicates
/// a pointer that cannot belong to the allocator at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The request, including worst-case alignment padding, would advance
    /// the stack marker past the region capacity.
    #[error("capacity exceeded: need {requested} bytes, {available} of {capacity} free")]
    CapacityExceeded {
        /// Bytes needed, including worst-case alignment padding.
        requested: usize,
        /// Bytes free above the stack marker at the time of the request.
        available: usize,
        /// Total capacity of the owned region.
        capacity: usize,
    },

    /// The pointer handed to a free operation does not resolve to an offset
    /// inside the owned region.
    #[error("invalid pointer {address:#x}: outside owned region (base {base:#x}, {capacity} bytes)")]
    InvalidPointer {
        /// The offending address.
        address: usize,
        /// Base address of the owned region.
        base: usize,
        /// Total capacity of the owned region.
        capacity: usize,
    },
}

impl AllocError {
    /// Records a request of `requested` bytes against a region with
    /// `available` of `capacity` bytes free above the marker.
    pub fn capacity_exceeded(requested: usize, available: usize, capacity: usize) -> Self {
        #[cfg(feature = "logging")]
        tracing::warn!(requested, available, capacity, "stack allocator capacity exceeded");
        Self::CapacityExceeded { requested, available, capacity }
    }

    /// Records a free whose pointer falls outside the owned region.
    pub fn invalid_pointer(address: usize, base: usize, capacity: usize) -> Self {
        #[cfg(feature = "logging")]
        tracing::error!(address, base, capacity, "pointer does not belong to this allocator");
        Self::InvalidPointer { address, base, capacity }
    }

    /// True when the caller can recover by shrinking or rewinding.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// True when a free was handed a pointer from outside the region.
    pub fn is_invalid_pointer(&self) -> bool {
        matches!(self, Self::InvalidPointer { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_display_carries_numbers() {
        let err = AllocError::capacity_exceeded(200, 64, 1024);
        let text = err.to_string();
        assert!(text.contains("200"));
        assert!(text.contains("64"));
        assert!(text.contains("1024"));
        assert!(err.is_capacity_exceeded());
        assert!(!err.is_invalid_pointer());
    }

    #[test]
    fn invalid_pointer_display_is_hex() {
        let err = AllocError::invalid_pointer(0xdead, 0x1000, 256);
        assert!(err.to_string().contains("0xdead"));
        assert!(err.is_invalid_pointer());
    }
}
