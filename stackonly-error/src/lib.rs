// Stackonly - stackonly-error
// Module: Stackonly Error Handling
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Stackonly error handling library
//!
//! Every failure a stackonly container can report is a small, `Copy`,
//! allocation-free [`Error`] value: a category, a numeric code and a static
//! message. Nothing in this crate allocates, so it is usable from the same
//! `no_std`/no-allocator call sites as the containers themselves.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Invalid operation (1000-1999)
//! - Pop/peek on an empty stack
//! - Dequeue/peek on an empty queue
//!
//! ## Lookup (2000-2999)
//! - Dictionary key not found
//!
//! ## Bounds (3000-3999)
//! - Logical index outside every chunk of an arena
//!
//! ## Validation (4000-4999)
//! - Zero-length buffers
//! - Key/value buffers of different lengths
//!
//! ## Capacity (5000-5999)
//! - Inline chunk table of an arena is full
//!
//! # Usage
//!
//! ```
//! use stackonly_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Lookup,
//!     codes::KEY_NOT_FOUND,
//!     "Key not found in dictionary",
//! );
//! assert!(error.is_key_not_found());
//!
//! let underflow = Error::stack_underflow();
//! assert_eq!(underflow.category, ErrorCategory::InvalidOperation);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for stackonly
pub mod codes;
/// Error and error handling types
pub mod errors;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for stackonly operations.
///
/// This type alias uses `stackonly_error::Error` as the error type and is
/// usable in `no_std` environments because the error never allocates.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting to specific error categories
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
