//! Stack-discipline allocation over a fixed region
//!
//! ## Modules
//! - `allocator` - Main `StackAllocator` implementation with LIFO semantics
//! - `config` - Configuration variants (production, debug)
//! - `frame` - RAII helper for automatic stack restoration
//! - `marker` - Saved positions for scoped deallocation

pub mod allocator;
pub mod config;
pub mod frame;
pub mod marker;

pub use allocator::{MAX_ALIGN, StackAllocator};
pub use config::StackConfig;
pub use frame::StackFrame;
pub use marker::StackMarker;
