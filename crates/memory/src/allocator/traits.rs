//! Capability contracts for fixed-region allocators
//!
//! The system is built around two traits:
//! - [`Allocator`]: the capability set any stack-discipline block allocator
//!   exposes — own a fixed region, report its base and size, allocate and
//!   free byte ranges, reset.
//! - [`MemoryUsage`]: memory tracking capabilities.
//!
//! # Safety
//!
//! [`Allocator`] is an unsafe trait: implementors promise that returned
//! pointers are valid, in-bounds and exclusive. Its methods are unsafe to
//! call: callers promise the stack discipline described on each method.

use core::ptr::NonNull;

use crate::error::AllocResult;

/// Capability contract for a block allocator over one fixed memory region
///
/// Construction takes ownership of an already-reserved region; the trait
/// itself never reserves or releases memory — that is the region provider's
/// job. `capacity` and `base_address` never change after construction.
///
/// Deallocation follows stack discipline: a free rewinds the allocator to
/// the freed address, releasing it **and everything allocated after it**.
/// Callers free in strict reverse order of allocation to get per-block
/// semantics.
///
/// # Safety
///
/// Implementors must guarantee:
/// - every pointer returned by `allocate`/`allocate_unaligned` lies within
///   `[base_address, base_address + capacity)` and does not overlap any
///   other live allocation;
/// - `capacity()` and `base_address()` are constant for the allocator's
///   lifetime;
/// - failed operations leave the allocator state untouched.
pub unsafe trait Allocator {
    /// Total owned bytes. Never changes after construction.
    fn capacity(&self) -> usize;

    /// Start of the owned region. Never changes after construction.
    fn base_address(&self) -> NonNull<u8>;

    /// Allocates `size` bytes aligned to `align`.
    ///
    /// `align` must be a power of two in `[1, 128]`; violations are a
    /// programming error, checked only in debug builds.
    ///
    /// # Errors
    /// Fails with `CapacityExceeded` when `size` plus worst-case alignment
    /// padding does not fit in the free part of the region.
    ///
    /// # Safety
    /// The returned memory is uninitialized; the caller must initialize it
    /// before reading and must stop using it once it is freed by any
    /// overlapping free or reset.
    unsafe fn allocate(&self, size: usize, align: usize) -> AllocResult<NonNull<u8>>;

    /// Allocates `size` bytes with no alignment guarantee and no header
    /// overhead.
    ///
    /// # Errors
    /// Fails with `CapacityExceeded` when `size` bytes do not fit.
    ///
    /// # Safety
    /// Same contract as [`Allocator::allocate`].
    unsafe fn allocate_unaligned(&self, size: usize) -> AllocResult<NonNull<u8>>;

    /// Frees an aligned allocation, rewinding the allocator to it.
    ///
    /// # Errors
    /// Fails with `InvalidPointer` when `ptr` does not resolve into the
    /// owned region.
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate` on this instance. Every
    /// pointer at or above the freed block becomes invalid.
    unsafe fn free(&self, ptr: NonNull<u8>) -> AllocResult<()>;

    /// Rewinds the allocator so the byte at `ptr` becomes the first free
    /// byte.
    ///
    /// # Errors
    /// Fails with `InvalidPointer` when `ptr` does not resolve to an offset
    /// in `[0, capacity)`.
    ///
    /// # Safety
    /// Every pointer at or above `ptr` becomes invalid.
    unsafe fn free_unaligned(&self, ptr: NonNull<u8>) -> AllocResult<()>;

    /// Resets the allocator to empty. The region stays owned and reusable.
    ///
    /// # Safety
    /// All previously returned pointers become invalid.
    unsafe fn clear(&self);
}

/// Memory tracking capabilities
pub trait MemoryUsage {
    /// Bytes currently allocated
    fn used_memory(&self) -> usize;

    /// Bytes available for allocation, if known
    fn available_memory(&self) -> Option<usize>;

    /// Total bytes owned, if known
    fn total_memory(&self) -> Option<usize>;

    /// Used fraction of the total, as a percentage
    fn memory_usage_percent(&self) -> Option<f32> {
        self.total_memory().map(|total| {
            if total == 0 {
                0.0
            } else {
                (self.used_memory() as f32 / total as f32) * 100.0
            }
        })
    }
}

// SAFETY: forwards every call to the underlying `T: Allocator`; no new
// unsafe operations, all contracts preserved through delegation.
unsafe impl<T: Allocator + ?Sized> Allocator for &T {
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn base_address(&self) -> NonNull<u8> {
        (**self).base_address()
    }

    unsafe fn allocate(&self, size: usize, align: usize) -> AllocResult<NonNull<u8>> {
        // SAFETY: same contract as T::allocate.
        unsafe { (**self).allocate(size, align) }
    }

    unsafe fn allocate_unaligned(&self, size: usize) -> AllocResult<NonNull<u8>> {
        // SAFETY: same contract as T::allocate_unaligned.
        unsafe { (**self).allocate_unaligned(size) }
    }

    unsafe fn free(&self, ptr: NonNull<u8>) -> AllocResult<()> {
        // SAFETY: same contract as T::free.
        unsafe { (**self).free(ptr) }
    }

    unsafe fn free_unaligned(&self, ptr: NonNull<u8>) -> AllocResult<()> {
        // SAFETY: same contract as T::free_unaligned.
        unsafe { (**self).free_unaligned(ptr) }
    }

    unsafe fn clear(&self) {
        // SAFETY: same contract as T::clear.
        unsafe { (**self).clear() }
    }
}

impl<T: MemoryUsage + ?Sized> MemoryUsage for &T {
    fn used_memory(&self) -> usize {
        (**self).used_memory()
    }

    fn available_memory(&self) -> Option<usize> {
        (**self).available_memory()
    }

    fn total_memory(&self) -> Option<usize> {
        (**self).total_memory()
    }

    fn memory_usage_percent(&self) -> Option<f32> {
        (**self).memory_usage_percent()
    }
}
