//! Platform-specific limits for the inline bookkeeping of expandable
//! containers.
//!
//! An [`ExpandableArray`](crate::collections::ExpandableArray) never
//! allocates, so the table that records its chunks lives inline and has a
//! fixed number of slots. The default number of slots is selected by
//! platform profile features:
//!
//! - `embedded-small`: MCU targets with ~64KB RAM
//! - `embedded-medium`: Embedded Linux with ~1MB RAM
//! - Default: Desktop/Server with ample memory
//!
//! Every expandable container also takes the slot count as a const generic
//! parameter, so a single call site can override the profile default.
//!
//! # Usage
//!
//! ```rust
//! use stackonly_collections::{limits, ExpandableStack};
//!
//! let mut first = [0u32; 4];
//! let stack: ExpandableStack<'_, u32> = ExpandableStack::new(&mut first);
//! assert_eq!(stack.max_chunks(), limits::DEFAULT_MAX_CHUNKS);
//! ```

/// Platform profile for embedded microcontrollers (~64KB RAM)
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Default number of chunks an arena can chain
    pub const DEFAULT_MAX_CHUNKS: usize = 4;
}

/// Platform profile for embedded Linux (~1MB RAM)
/// Note: embedded-small takes priority if both features are enabled
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Default number of chunks an arena can chain
    pub const DEFAULT_MAX_CHUNKS: usize = 8;
}

/// Platform profile for desktop/server (default - ample memory)
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Default number of chunks an arena can chain
    pub const DEFAULT_MAX_CHUNKS: usize = 16;
}

// Re-export platform limits at module level for convenience
pub use platform::*;

/// Compile-time assertions to ensure limits are reasonable
mod assertions {
    use super::platform::*;

    // The head chunk always occupies slot 0, growth needs at least one more.
    const _: () = assert!(DEFAULT_MAX_CHUNKS >= 2, "Chunk table too small to expand");
}
