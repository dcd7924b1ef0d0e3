// Stackonly - stackonly-collections
// Module: Crate root
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Zero-allocation containers over caller-supplied buffers.
//!
//! Every container in this crate borrows the memory it stores elements in.
//! Nothing is ever allocated, and the borrow checker guarantees that no
//! container outlives the buffers it was built from.
//!
//! - Fixed containers ([`FixedStack`], [`FixedQueue`], [`FixedDictionary`])
//!   wrap exactly one buffer (or one key/value pair of buffers).
//! - Expandable containers ([`ExpandableStack`], [`ExpandableQueue`],
//!   [`ExpandableDictionary`]) store elements in an [`ExpandableArray`], a
//!   chain of buffers that grows when the caller supplies another one.
//!
//! Writes to a full container return `false` and change nothing. Reads from
//! an empty container, lookups of missing keys and out-of-range indices
//! return an [`Error`].
//!
//! # Feature Flags
//!
//! - `std`: implements `std::error::Error` for [`Error`]
//! - `tracing`: structured events for arena growth and rejected writes
//! - `embedded-small` / `embedded-medium`: smaller default chunk tables,
//!   see [`limits`]
//!
//! # Example
//!
//! ```
//! use stackonly_collections::{ExpandableQueue, FixedStack};
//!
//! let mut slots = [0u16; 2];
//! let mut stack = FixedStack::new(&mut slots);
//! assert!(stack.push(7));
//! *stack.peek()? += 1;
//! assert_eq!(*stack.pop()?, 8);
//!
//! let mut first = [0u16; 1];
//! let mut second = [0u16; 4];
//! let mut queue: ExpandableQueue<'_, u16> = ExpandableQueue::new(&mut first);
//! assert!(queue.enqueue(1));
//! if !queue.enqueue(2) {
//!     queue.expand(&mut second)?;
//!     assert!(queue.enqueue(2));
//! }
//! assert_eq!(queue.len(), 2);
//! # Ok::<(), stackonly_collections::Error>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

/// Buffer-backed stacks, queues, dictionaries and the chunk arena
pub mod collections;
/// Compile-time limits
pub mod limits;
/// Common traits
pub mod traits;
/// Tracing integration (requires the `tracing` feature)
pub mod tracing;

pub use collections::{
    ExpandableArray, ExpandableDictionary, ExpandableQueue, ExpandableStack, FixedDictionary,
    FixedQueue, FixedStack,
};
pub use stackonly_error::{codes, Error, ErrorCategory, Result};
pub use traits::BoundedCapacity;
