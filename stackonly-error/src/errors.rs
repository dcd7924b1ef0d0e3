// Stackonly - stackonly-error
// Module: Stackonly Error Types
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling for the stackonly containers
///
/// This module provides the error type shared by every container, its
/// categories, and the factory functions the containers use to build it.
use core::fmt;

use crate::{codes, ToErrorCategory};

/// `Error` categories for stackonly operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Precondition violations (empty buffers, mismatched lengths)
    Validation       = 1,
    /// Reads from an empty stack or queue
    InvalidOperation = 2,
    /// Dictionary lookups that found no entry
    Lookup           = 3,
    /// Indices outside the logical length of an arena
    Bounds           = 4,
    /// Exhaustion of a fixed-size bookkeeping table
    Capacity         = 5,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// Stackonly `Error` type
///
/// Categorized error with a numeric code and a static message. It is `Copy`
/// and never allocates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Pop or peek on an empty stack
    pub const STACK_UNDERFLOW: Self = Self::new(
        ErrorCategory::InvalidOperation,
        codes::STACK_UNDERFLOW,
        "Stack is empty",
    );
    /// Dequeue or peek on an empty queue
    pub const QUEUE_UNDERFLOW: Self = Self::new(
        ErrorCategory::InvalidOperation,
        codes::QUEUE_UNDERFLOW,
        "Queue is empty",
    );
    /// Dictionary lookup miss
    pub const KEY_NOT_FOUND: Self = Self::new(
        ErrorCategory::Lookup,
        codes::KEY_NOT_FOUND,
        "Key not found in dictionary",
    );
    /// Arena index outside every chunk
    pub const INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_RANGE,
        "Index out of range",
    );
    /// Zero-length buffer
    pub const EMPTY_BUFFER: Self = Self::new(
        ErrorCategory::Validation,
        codes::EMPTY_BUFFER,
        "Buffer length must be greater than zero",
    );
    /// Key and value buffers differ in length
    pub const MISMATCHED_BUFFER_LENGTHS: Self = Self::new(
        ErrorCategory::Validation,
        codes::MISMATCHED_BUFFER_LENGTHS,
        "Key and value buffers must have the same length",
    );
    /// No free slot in an arena's chunk table
    pub const CHUNK_TABLE_EXHAUSTED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CHUNK_TABLE_EXHAUSTED,
        "Arena chunk table is full",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    // Factory methods

    /// Create an invalid operation error
    #[must_use]
    pub const fn invalid_operation(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::InvalidOperation, code, message)
    }

    /// Create a stack underflow error
    #[must_use]
    pub const fn stack_underflow() -> Self {
        Self::STACK_UNDERFLOW
    }

    /// Create a queue underflow error
    #[must_use]
    pub const fn queue_underflow() -> Self {
        Self::QUEUE_UNDERFLOW
    }

    /// Create a key not found error
    #[must_use]
    pub const fn key_not_found() -> Self {
        Self::KEY_NOT_FOUND
    }

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range() -> Self {
        Self::INDEX_OUT_OF_RANGE
    }

    /// Create a validation error
    #[must_use]
    pub const fn validation_error(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, code, message)
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(code: u16, message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, code, message)
    }

    /// Check if this is an invalid operation error
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        self.category == ErrorCategory::InvalidOperation
    }

    /// Check if this is a key not found error
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        self.category == ErrorCategory::Lookup
    }

    /// Check if this is an out of range error
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_carry_category_and_code() {
        let error = Error::stack_underflow();
        assert!(error.is_invalid_operation());
        assert_eq!(error.code, codes::STACK_UNDERFLOW);

        let error = Error::queue_underflow();
        assert!(error.is_invalid_operation());
        assert_eq!(error.code, codes::QUEUE_UNDERFLOW);

        assert!(Error::key_not_found().is_key_not_found());
        assert!(Error::index_out_of_range().is_out_of_range());
        assert!(Error::EMPTY_BUFFER.is_validation_error());
        assert!(Error::CHUNK_TABLE_EXHAUSTED.is_capacity_error());
    }

    #[test]
    fn test_error_source_accessors() {
        let error = Error::MISMATCHED_BUFFER_LENGTHS;
        assert_eq!(ErrorSource::code(&error), codes::MISMATCHED_BUFFER_LENGTHS);
        assert_eq!(ErrorSource::category(&error), ErrorCategory::Validation);
        assert_eq!(error.to_category(), ErrorCategory::Validation);
        assert!(!ErrorSource::message(&error).is_empty());
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(Error::key_not_found(), Error::KEY_NOT_FOUND);
        assert_ne!(Error::stack_underflow(), Error::queue_underflow());
    }
}
