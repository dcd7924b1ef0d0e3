// Stackonly - stackonly-collections
// Module: FixedQueue - Circular FIFO queue over one caller buffer
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Circular FIFO queue over a single caller-supplied buffer.
//!
//! `FixedQueue<'a, T>` keeps `head`, `tail` and `count` over a borrowed
//! buffer and wraps both indices modulo the buffer length.
//!
//! # Characteristics
//!
//! - **Zero allocation**: elements are written straight into the buffer
//! - **O(1) operations**: `enqueue`, `dequeue`, `peek`, `clear`
//! - **Circular buffer**: wraparound for continuous use
//! - **In-place access**: `dequeue` and `peek` hand out `&mut T`

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::traits::BoundedCapacity;

/// A FIFO queue backed by one borrowed buffer.
///
/// # Invariants
///
/// 1. `count <= buffer.len()`
/// 2. `head` and `tail` are always `< buffer.len()` (or 0 for an empty buffer)
/// 3. `tail == (head + count) % buffer.len()`
///
/// # Examples
///
/// ```
/// use stackonly_collections::FixedQueue;
///
/// let mut buffer = [0u32; 3];
/// let mut queue = FixedQueue::new(&mut buffer);
///
/// assert!(queue.enqueue(1));
/// assert!(queue.enqueue(2));
///
/// assert_eq!(*queue.dequeue()?, 1);
/// assert_eq!(*queue.peek()?, 2);
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct FixedQueue<'a, T> {
    buffer: &'a mut [T],

    /// Index of the first element
    head: usize,

    /// Index where the next element will be written
    tail: usize,

    count: usize,
}

impl<'a, T> FixedQueue<'a, T> {
    /// Creates an empty queue over `buffer`.
    ///
    /// `buffer` must not be empty (`debug_assert!`).
    #[must_use]
    pub fn new(buffer: &'a mut [T]) -> Self {
        debug_assert!(!buffer.is_empty(), "FixedQueue buffer must not be empty");
        Self {
            buffer,
            head: 0,
            tail: 0,
            count: 0,
        }
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

    /// Number of queued elements.
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

    /// Returns `true` if no element is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot holds a queued element.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count >= self.buffer.len()
    }

    /// Appends `item` at the tail.
    ///
    /// Returns `false`, leaving the queue unchanged, if it is full.
    #[must_use = "a full queue rejects the item"]
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            trace_event!(trace, capacity = self.buffer.len(), "enqueue rejected, queue full");
            return false;
        }

        let index = self.tail;
        self.tail = (self.tail + 1) % self.buffer.len();
        self.count += 1;

        self.buffer[index] = item;
        true
    }

    /// Removes the head element and returns a reference to its slot.
    ///
    /// The slot keeps its value until a later `enqueue` wraps around to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QUEUE_UNDERFLOW`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::queue_underflow());
        }

        let index = self.head;
        self.head = (self.head + 1) % self.buffer.len();
        self.count -= 1;

        Ok(&mut self.buffer[index])
    }

    /// Returns a reference to the head element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QUEUE_UNDERFLOW`] if the queue is empty.
    pub fn peek(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::queue_underflow());
        }

        Ok(&mut self.buffer[self.head])
    }

    /// Resets count, head and tail to zero. The buffer is not touched.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
        self.head = 0;
        self.tail = 0;
    }

    /// The whole backing buffer in physical order.
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

    /// Physical slot of the logical position `index`, counted from the head.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.buffer.len()
    }
}

impl<T> BoundedCapacity for FixedQueue<'_, T> {
    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Indexes the logical position `index` from the head, `(head + index) %
/// capacity`. Positions past `len()` wrap onto stale or live slots.
impl<T> Index<usize> for FixedQueue<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buffer[self.physical(index)]
    }
}

impl<T> IndexMut<usize> for FixedQueue<'_, T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let slot = self.physical(index);
        &mut self.buffer[slot]
    }
}
