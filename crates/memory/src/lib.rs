//! Memory management primitives for the Prism renderer
//!
//! One pre-reserved block, one monotonically adjustable offset: the
//! [`allocator::StackAllocator`] hands out byte ranges in O(1) and frees
//! them in reverse order of allocation, which is how the renderer recycles
//! per-frame scratch memory. There is no allocation table — an aligned
//! allocation keeps a single adjustment byte immediately before its
//! payload, and a free is a *rewind* of the stack marker, not a point
//! deallocation.
//!
//! # Example
//!
//! ```
//! use prism_memory::allocator::{StackAllocator, StackFrame};
//!
//! let stack = StackAllocator::new(4096);
//! {
//!     let _frame = StackFrame::new(&stack);
//!     let vertices = unsafe { stack.allocate(1024, 16)? };
//!     assert_eq!(vertices.as_ptr() as usize % 16, 0);
//!     // ... fill and consume the scratch buffer ...
//! } // frame drop rewinds the stack
//! assert_eq!(stack.used(), 0);
//! # Ok::<(), prism_memory::AllocError>(())
//! ```
//!
//! # Features
//!
//! - `logging` (default): emit `tracing` events when allocation errors are
//!   constructed

#![warn(missing_docs)]

pub mod allocator;
pub mod error;
pub mod utils;

// Re-export common types for convenience
pub use error::{AllocError, AllocResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
