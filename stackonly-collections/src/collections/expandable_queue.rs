// Stackonly - stackonly-collections
// Module: ExpandableQueue - Circular FIFO queue over a growable chunk arena
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Circular FIFO queue whose storage is an [`ExpandableArray`].
//!
//! `head` and `tail` wrap modulo the total arena length. Expanding the
//! queue widens that modulus at once, so the next `enqueue` may land in the
//! new chunk even if nothing else changed.
//!
//! # Growth and wraparound
//!
//! When the live region wraps past the end of the arena, a new chunk would
//! otherwise open a gap between the two halves of the queue. `expand`
//! first rotates the live region in place so that `head` becomes 0; this
//! uses element swaps only and never allocates.
//!
//! ```text
//! before:  [c d _ a b]  head = 3, tail = 2
//! rotate:  [a b c d _]  head = 0, tail = 4
//! expand:  [a b c d _][_ _]  tail = 4, modulus 7
//! ```

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::collections::ExpandableArray;
use crate::limits::DEFAULT_MAX_CHUNKS;
use crate::traits::BoundedCapacity;

/// A FIFO queue backed by a chain of borrowed buffers.
///
/// # Invariants
///
/// 1. `count <= array.len()`
/// 2. `head < array.len()` and `tail < array.len()`
/// 3. `tail == (head + count) % array.len()`
///
/// # Examples
///
/// ```
/// use stackonly_collections::ExpandableQueue;
///
/// let mut first = [0u32; 1];
/// let mut second = [0u32; 1];
///
/// let mut queue: ExpandableQueue<'_, u32> = ExpandableQueue::new(&mut first);
/// assert!(queue.enqueue(1));
/// assert!(!queue.enqueue(2));
///
/// queue.expand(&mut second)?;
/// assert!(queue.enqueue(2));
///
/// assert_eq!(*queue.dequeue()?, 1);
/// assert_eq!(*queue.dequeue()?, 2);
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct ExpandableQueue<'a, T, const C: usize = DEFAULT_MAX_CHUNKS> {
    array: ExpandableArray<'a, T, C>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<'a, T, const C: usize> ExpandableQueue<'a, T, C> {
    /// Creates an empty queue with `buffer` as its first chunk.
    ///
    /// `buffer` must not be empty (`debug_assert!`).
    #[must_use]
    pub fn new(buffer: &'a mut [T]) -> Self {
        Self {
            array: ExpandableArray::new(buffer),
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
        Ok(Self {
            array: ExpandableArray::try_new(buffer)?,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Sum of all chunk lengths.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.array.len()
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
        self.count >= self.array.len()
    }

    /// Number of chunks backing the queue.
    #[inline]
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.array.chunk_count()
    }

    /// Maximum number of chunks the queue can chain.
    #[inline]
    #[must_use]
    pub const fn max_chunks(&self) -> usize {
        C
    }

    /// Appends `item` at the tail.
    ///
    /// Returns `false`, leaving the queue unchanged, if it is full.
    #[must_use = "a full queue rejects the item"]
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            trace_event!(trace, capacity = self.array.len(), "enqueue rejected, queue full");
            return false;
        }

        let Ok(slot) = self.array.get_mut(self.tail) else {
            return false;
        };
        *slot = item;

        self.tail = (self.tail + 1) % self.array.len();
        self.count += 1;
        true
    }

    /// Removes the head element and returns a reference to its slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::QUEUE_UNDERFLOW`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::queue_underflow());
        }

        let index = self.head;
        self.head = (self.head + 1) % self.array.len();
        self.count -= 1;

        self.array.get_mut(index)
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

        self.array.get_mut(self.head)
    }

    /// Resets count, head and tail to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
        self.head = 0;
        self.tail = 0;
    }

    /// Chains `buffer` as a new chunk, growing the capacity by its length.
    ///
    /// Queued elements keep their FIFO order. If the live region currently
    /// wraps, it is rotated to start at slot 0 before the chunk is chained.
    /// `buffer` must not be empty (`debug_assert!`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CHUNK_TABLE_EXHAUSTED`] if all `C` chunk slots are in
    /// use; the queue is unchanged.
    pub fn expand(&mut self, buffer: &'a mut [T]) -> Result<()> {
        let old_len = self.array.len();
        self.array.expand(buffer)?;

        if self.head + self.count > old_len {
            rotate_left(&mut self.array, self.head, old_len)?;
            self.head = 0;
        }
        self.tail = (self.head + self.count) % self.array.len();
        Ok(())
    }

    /// Checked variant of [`expand`](Self::expand).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `buffer` is empty, otherwise the
    /// errors of [`expand`](Self::expand).
    pub fn try_expand(&mut self, buffer: &'a mut [T]) -> Result<()> {
        if buffer.is_empty() {
            return Err(Error::EMPTY_BUFFER);
        }
        self.expand(buffer)
    }

    /// The backing arena in physical order.
    #[inline]
    #[must_use]
    pub const fn array(&self) -> &ExpandableArray<'a, T, C> {
        &self.array
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.array.len()
    }
}

/// Rotates `array[..len]` left by `mid` with three in-place reversals.
fn rotate_left<T, const C: usize>(
    array: &mut ExpandableArray<'_, T, C>,
    mid: usize,
    len: usize,
) -> Result<()> {
    reverse(array, 0, mid)?;
    reverse(array, mid, len)?;
    reverse(array, 0, len)
}

fn reverse<T, const C: usize>(
    array: &mut ExpandableArray<'_, T, C>,
    mut start: usize,
    mut end: usize,
) -> Result<()> {
    while start + 1 < end {
        end -= 1;
        array.swap(start, end)?;
        start += 1;
    }
    Ok(())
}

impl<T, const C: usize> BoundedCapacity for ExpandableQueue<'_, T, C> {
    fn capacity(&self) -> usize {
        self.array.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Indexes the logical position `index` from the head, modulo the total
/// arena length.
impl<T, const C: usize> Index<usize> for ExpandableQueue<'_, T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.array[self.physical(index)]
    }
}

impl<T, const C: usize> IndexMut<usize> for ExpandableQueue<'_, T, C> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let slot = self.physical(index);
        &mut self.array[slot]
    }
}
