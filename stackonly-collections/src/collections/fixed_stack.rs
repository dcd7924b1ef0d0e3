// Stackonly - stackonly-collections
// Module: FixedStack - LIFO stack over one caller buffer
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! LIFO stack over a single caller-supplied buffer.
//!
//! `FixedStack<'a, T>` borrows a `&mut [T]` for its whole life and keeps
//! only a count of its own. Capacity is the buffer length and never changes.
//!
//! # Characteristics
//!
//! - **Zero allocation**: elements are written straight into the buffer
//! - **O(1) operations**: `push`, `pop`, `peek`, `clear`
//! - **In-place access**: `pop` and `peek` hand out `&mut T` into the buffer
//! - **No teardown**: `clear` only resets the count, stale values remain

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::traits::BoundedCapacity;

/// A LIFO stack backed by one borrowed buffer.
///
/// # Invariants
///
/// 1. `count <= buffer.len()`
/// 2. Live elements are `buffer[..count]`, top at `buffer[count - 1]`
///
/// # Examples
///
/// ```
/// use stackonly_collections::FixedStack;
///
/// let mut buffer = [0u32; 2];
/// let mut stack = FixedStack::new(&mut buffer);
///
/// assert!(stack.push(1));
/// assert!(stack.push(2));
/// assert!(!stack.push(3)); // Full
///
/// assert_eq!(*stack.pop()?, 2);
/// assert_eq!(*stack.pop()?, 1);
/// assert!(stack.pop().is_err());
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct FixedStack<'a, T> {
    buffer: &'a mut [T],
    count: usize,
}

impl<'a, T> FixedStack<'a, T> {
    /// Creates an empty stack over `buffer`.
    ///
    /// `buffer` must not be empty (`debug_assert!`).
    #[must_use]
    pub fn new(buffer: &'a mut [T]) -> Self {
        debug_assert!(!buffer.is_empty(), "FixedStack buffer must not be empty");
        Self { buffer, count: 0 }
    }

    /// Checked variant of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `buffer` is empty.
    pub fn try_new(buffer: &'a mut [T]) -> Result<Self> {
        if buffer.is_empty() {
            return Err(Error::EMPTY_BUFFER);
        }
        Ok(Self::new(buffer))
    }

    /// Number of elements on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Buffer length.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot of the buffer is live.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count >= self.buffer.len()
    }

    /// Pushes `item` on top of the stack.
    ///
    /// Returns `false`, leaving the stack unchanged, if it is full.
    #[must_use = "a full stack rejects the item"]
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            trace_event!(trace, capacity = self.buffer.len(), "push rejected, stack full");
            return false;
        }

        self.buffer[self.count] = item;
        self.count += 1;
        true
    }

    /// Removes the top element and returns a reference to its slot.
    ///
    /// The slot keeps its value until the next `push` overwrites it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::STACK_UNDERFLOW`] if the stack is empty.
    pub fn pop(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::stack_underflow());
        }

        self.count -= 1;
        Ok(&mut self.buffer[self.count])
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// Writing through the reference updates the element in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::STACK_UNDERFLOW`] if the stack is empty.
    pub fn peek(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::stack_underflow());
        }

        Ok(&mut self.buffer[self.count - 1])
    }

    /// Resets the count to zero. The buffer is not touched.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// The whole backing buffer, live and stale slots alike.
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[T] {
        &*self.buffer
    }

    /// Mutable access to the whole backing buffer.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [T] {
        &mut *self.buffer
    }
}

impl<T> BoundedCapacity for FixedStack<'_, T> {
    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Indexes the physical slot, from the bottom of the stack.
impl<T> Index<usize> for FixedStack<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for FixedStack<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer[index]
    }
}
